/*!
This module defines the instructions executed by the Pike VM, and the
[`InstrSeq`] type used by the compiler for emitting them.

Each instruction occupies one slot in the program and is identified by its
location, which is the index of the slot. The code for the pattern `a(b|c)*`
looks like this:

```text
00000: JUMP 00001
00001: LIT 0x61
00002: FORK 00003 00009
00003: FORK 00004 00006
00004: LIT 0x62
00005: JUMP 00008
00006: LIT 0x63
00007: JUMP 00008
00008: JUMP 00002
00009: JUMP 0000a
0000a: MATCH
```

Instructions that consume one codepoint from the input are `LIT`, `CLASS`
and `ANY`. `JUMP` and `FORK` are epsilon transitions that continue the
execution at one or more locations without consuming input. `MATCH` is the
final state.
*/

use std::fmt::{Display, Formatter};

use xspattern_parser::sets::{Codepoint, Predicate};

use crate::re::Error;

/// Instructions supported by the Pike VM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instr {
    /// Match for the pattern has been found.
    Accept,

    /// Matches any codepoint, including the sentinels that surround the
    /// input when matching substrings.
    AnyCodepoint,

    /// Matches a specific codepoint.
    Codepoint(Codepoint),

    /// Matches any codepoint in a character class.
    Class(Predicate),

    /// Continues the execution at every one of the given locations. With a
    /// single location this is an unconditional jump, with more than one it
    /// forks the current thread.
    Jump(Vec<usize>),
}

impl Instr {
    /// Returns true if the instruction consumes `c`.
    #[inline]
    pub fn matches(&self, c: Codepoint) -> bool {
        match self {
            Instr::AnyCodepoint => true,
            Instr::Codepoint(cp) => *cp == c,
            Instr::Class(class) => class.matches(c),
            Instr::Accept | Instr::Jump(_) => false,
        }
    }
}

/// A sequence of instructions for the Pike VM.
///
/// Instructions are appended at the end of the sequence. Jumps are usually
/// emitted before the location they point to is known, so they start with
/// no targets and are patched later with [`InstrSeq::patch_jump`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InstrSeq {
    /// The instructions emitted so far.
    seq: Vec<Instr>,
    /// Maximum number of instructions in the sequence.
    max_size: usize,
}

impl AsRef<[Instr]> for InstrSeq {
    fn as_ref(&self) -> &[Instr] {
        self.seq.as_slice()
    }
}

impl InstrSeq {
    /// Creates a new [`InstrSeq`] that can hold up to `max_size`
    /// instructions.
    pub fn new(max_size: usize) -> Self {
        Self { seq: Vec::new(), max_size }
    }

    /// Returns the current location within the instruction sequence.
    ///
    /// This function always returns the location where the next instruction
    /// will be put.
    #[inline]
    pub fn location(&self) -> usize {
        self.seq.len()
    }

    /// Adds some instruction at the end of the sequence and returns the
    /// location where the newly added instruction resides.
    pub fn emit_instr(&mut self, instr: Instr) -> Result<usize, Error> {
        let location = self.location();
        if location >= self.max_size {
            return Err(Error::TooLarge);
        }
        self.seq.push(instr);
        Ok(location)
    }

    /// Adds a [`Instr::Jump`] instruction with the given targets.
    pub fn emit_jump(&mut self, targets: Vec<usize>) -> Result<usize, Error> {
        self.emit_instr(Instr::Jump(targets))
    }

    /// Appends `target` to the targets of the jump at `location`.
    ///
    /// # Panics
    ///
    /// If the instruction at `location` is not a jump.
    pub fn patch_jump(&mut self, location: usize, target: usize) {
        match self.seq.get_mut(location) {
            Some(Instr::Jump(targets)) => targets.push(target),
            _ => unreachable!("no jump at location {:05x}", location),
        }
    }
}

impl Display for InstrSeq {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;

        for (addr, instr) in self.seq.iter().enumerate() {
            match instr {
                Instr::AnyCodepoint => {
                    writeln!(f, "{:05x}: ANY", addr)?;
                }
                Instr::Codepoint(c) => {
                    writeln!(f, "{:05x}: LIT {:#04x}", addr, c)?;
                }
                Instr::Class(class) => {
                    writeln!(f, "{:05x}: CLASS {}", addr, class)?;
                }
                Instr::Jump(targets) if targets.len() == 1 => {
                    writeln!(f, "{:05x}: JUMP {:05x}", addr, targets[0])?;
                }
                Instr::Jump(targets) => {
                    write!(f, "{:05x}: FORK", addr)?;
                    for target in targets {
                        write!(f, " {:05x}", target)?;
                    }
                    writeln!(f)?;
                }
                Instr::Accept => {
                    writeln!(f, "{:05x}: MATCH", addr)?;
                }
            }
        }

        Ok(())
    }
}
