// Interactive UI - the prompt-based stand-in for the original window

pub mod form;
