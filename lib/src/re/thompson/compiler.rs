/*!
This module provides a compiler that takes a pattern's AST and produces a
sequence of instructions for the Pike's VM.

Atoms with a quantifier are compiled by repeating the code for the atom as
many times as needed. For instance, `a{2,4}` is compiled like `aa(a)?(a)?`,
where each optional copy is preceded by a fork that can skip it. Unbounded
repetitions use a loop that jumps back to the start of the atom's code.
*/

use xspattern_parser::ast::{Atom, Branch, Piece, Quantifier, RegExp};
use xspattern_parser::sets::{END_SENTINEL, START_SENTINEL};
use xspattern_parser::Language;

use super::instr::{Instr, InstrSeq};

use crate::re::Error;

/// Compiles the AST of a pattern into code for the Pike VM.
///
/// The code is laid down in a single pass over the AST. Forward jumps are
/// emitted without targets, and the compiler patches them as soon as the
/// location they must point to is known.
pub(crate) struct Compiler {
    /// The code produced so far.
    code: InstrSeq,
}

impl Compiler {
    /// Creates a compiler that produces at most `max_size` instructions.
    pub fn new(max_size: usize) -> Self {
        Self { code: InstrSeq::new(max_size) }
    }

    /// Compiles `regexp` and returns the code that matches it.
    ///
    /// In XPath mode the pattern can match anywhere within the input, so the
    /// code for the pattern is surrounded by loops that consume any prefix
    /// and any suffix. Those loops use [`Instr::AnyCodepoint`], which also
    /// consumes the sentinels that the VM receives before and after the
    /// actual input.
    pub fn compile(
        mut self,
        regexp: &RegExp,
        language: Language,
    ) -> Result<InstrSeq, Error> {
        if matches!(language, Language::XPath) {
            self.emit_any_loop()?;
        }

        self.compile_regexp(regexp)?;

        if matches!(language, Language::XPath) {
            self.emit_any_loop()?;
        }

        self.code.emit_instr(Instr::Accept)?;

        Ok(self.code)
    }

    /// Emits the code for `regexp`.
    ///
    /// A single fork has one target per branch, and each branch ends with
    /// a jump to the location that follows the code for the last branch.
    ///
    /// ```text
    /// l0: FORK l1 l2 ...
    /// l1: ... code for branch 1 ...
    ///     JUMP end
    /// l2: ... code for branch 2 ...
    ///     JUMP end
    /// end:
    /// ```
    fn compile_regexp(&mut self, regexp: &RegExp) -> Result<(), Error> {
        let fork = self.code.emit_jump(Vec::new())?;
        let mut joins = Vec::with_capacity(regexp.branches.len());

        for branch in regexp.branches.iter() {
            self.code.patch_jump(fork, self.code.location());
            self.compile_branch(branch)?;
            joins.push(self.code.emit_jump(Vec::new())?);
        }

        let end = self.code.location();

        for join in joins {
            self.code.patch_jump(join, end);
        }

        Ok(())
    }

    fn compile_branch(&mut self, branch: &Branch) -> Result<(), Error> {
        let mut prev: Option<&Piece> = None;
        for piece in branch.pieces.iter() {
            // Anchors don't consume input, but here they are compiled as
            // the sentinel they match. `^^` must match like `^`, so only
            // the first anchor in a run of identical ones is kept.
            if !(is_anchor(piece) && prev == Some(piece)) {
                self.compile_piece(piece)?;
            }
            prev = Some(piece);
        }
        Ok(())
    }

    fn compile_piece(&mut self, piece: &Piece) -> Result<(), Error> {
        let min = piece.quantifier.min;

        match piece.quantifier.max {
            // `a{n,}` with `n > 0` is compiled as `n - 1` copies of the atom
            // followed by a loop that matches the atom one or more times.
            //
            // l0: ... code for atom ...
            //     FORK l0 end
            // end:
            None if min > 0 => {
                for _ in 0..min - 1 {
                    self.compile_atom(&piece.atom)?;
                }
                let start = self.code.location();
                self.compile_atom(&piece.atom)?;
                let fork = self.code.emit_jump(vec![start])?;
                self.code.patch_jump(fork, self.code.location());
            }
            // `a*`
            //
            // l0: FORK l1 end
            // l1: ... code for atom ...
            //     JUMP l0
            // end:
            None => {
                let fork = self.code.emit_jump(Vec::new())?;
                self.code.patch_jump(fork, self.code.location());
                self.compile_atom(&piece.atom)?;
                self.code.emit_jump(vec![fork])?;
                self.code.patch_jump(fork, self.code.location());
            }
            // `a{n,m}` is compiled as `n` copies of the atom followed by
            // `m - n` optional copies, each of them preceded by a fork that
            // can skip it.
            //
            // l0: FORK l1 l2
            // l1: ... code for atom ...
            // l2:
            Some(max) => {
                for _ in 0..min {
                    self.compile_atom(&piece.atom)?;
                }
                for _ in min..max {
                    let fork = self.code.emit_jump(Vec::new())?;
                    self.code.patch_jump(fork, self.code.location());
                    self.compile_atom(&piece.atom)?;
                    self.code.patch_jump(fork, self.code.location());
                }
            }
        }

        Ok(())
    }

    fn compile_atom(&mut self, atom: &Atom) -> Result<(), Error> {
        match atom {
            Atom::Codepoint(c) => {
                self.code.emit_instr(Instr::Codepoint(*c))?;
            }
            Atom::Predicate(predicate) => {
                self.code.emit_instr(Instr::Class(predicate.clone()))?;
            }
            Atom::RegExp(regexp) => {
                self.compile_regexp(regexp)?;
            }
        }
        Ok(())
    }

    /// Emits a loop that consumes zero or more codepoints of any kind,
    /// sentinels included.
    fn emit_any_loop(&mut self) -> Result<(), Error> {
        let fork = self.code.emit_jump(Vec::new())?;
        self.code.patch_jump(fork, self.code.location());
        self.code.emit_instr(Instr::AnyCodepoint)?;
        self.code.emit_jump(vec![fork])?;
        self.code.patch_jump(fork, self.code.location());
        Ok(())
    }
}

/// Returns true if `piece` is a `^` or `$` anchor without a quantifier.
fn is_anchor(piece: &Piece) -> bool {
    matches!(piece.atom, Atom::Codepoint(START_SENTINEL | END_SENTINEL))
        && piece.quantifier == Quantifier::EXACTLY_ONE
}
