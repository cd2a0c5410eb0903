pub mod file;

// A physical source file is a sequence of newline-terminated text lines. The
// final line may lack its terminator. Lines are read lazily and the file stays
// open only while its lines are being consumed.
