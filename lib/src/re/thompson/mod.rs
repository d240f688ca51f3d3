/*! A pattern compiler based on the [Thompson's construction][1] algorithm
that produces code for the Pike VM described in Russ Cox's article
[Regular Expression Matching: the Virtual Machine Approach][2].

The VM works with Unicode codepoints instead of bytes, and character classes
are tested with a single instruction that holds the class' ranges. Patterns
have no captures, so each thread is just an instruction pointer.

[1]: https://en.wikipedia.org/wiki/Thompson%27s_construction
[2]: https://swtch.com/~rsc/regexp/regexp2.html
*/

pub(crate) use compiler::Compiler;
pub(crate) use instr::InstrSeq;
pub(crate) use pikevm::PikeVM;

mod compiler;
mod instr;
mod pikevm;
