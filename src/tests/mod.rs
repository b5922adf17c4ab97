mod form;
mod presentation;
