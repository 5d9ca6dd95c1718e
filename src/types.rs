pub mod diff_span;
