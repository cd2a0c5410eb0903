pub mod directive;
pub mod file;
pub mod ppinclude;
pub mod preprocessor;

// A line of the form `#include "name"` causes the named file to be read and
// processed in place of that line, recursively. Every other line is passed
// through with its surrounding whitespace removed. Include names are taken
// relative to the working directory, never to the including file.
