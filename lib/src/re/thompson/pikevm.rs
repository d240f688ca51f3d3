use std::mem;

use xspattern_parser::sets::Codepoint;

use super::instr::Instr;
use crate::re::threadset::ThreadSet;

/// Represents a [Pike's VM][1] that executes VM code produced by the
/// [compiler][`crate::re::thompson::compiler::Compiler`].
///
/// Each thread is simply the location of the instruction that it will
/// execute next. There is no backtracking: all the threads advance in
/// lockstep, one input codepoint at a time.
///
/// [1]: https://swtch.com/~rsc/regexp/regexp2.html
pub(crate) struct PikeVM<'r> {
    /// The code for the VM. Produced by
    /// [`crate::re::thompson::compiler::Compiler`].
    code: &'r [Instr],
    /// The set of currently active threads. Each item in this set is the
    /// location of the instruction the thread is about to execute.
    threads: ThreadSet,
    /// The set of threads that will be active in the next step.
    next_threads: ThreadSet,
    /// State for the [`epsilon_closure`] function.
    cache: EpsilonClosureState,
}

impl<'r> PikeVM<'r> {
    /// Creates a new [`PikeVM`].
    pub fn new(code: &'r [Instr]) -> Self {
        Self {
            code,
            threads: ThreadSet::with_capacity(code.len()),
            next_threads: ThreadSet::with_capacity(code.len()),
            cache: EpsilonClosureState::new(),
        }
    }

    /// Returns true if the code matches the whole `input`.
    pub fn try_match<I>(&mut self, input: I) -> bool
    where
        I: IntoIterator<Item = Codepoint>,
    {
        self.threads.clear();
        self.next_threads.clear();

        epsilon_closure(self.code, 0, &mut self.cache, &mut self.threads);

        for c in input {
            // Once all threads are dead the rest of the input doesn't
            // matter.
            if self.threads.is_empty() {
                return false;
            }

            for ip in self.threads.iter() {
                if self.code[*ip].matches(c) {
                    epsilon_closure(
                        self.code,
                        *ip + 1,
                        &mut self.cache,
                        &mut self.next_threads,
                    );
                }
            }

            mem::swap(&mut self.threads, &mut self.next_threads);
            self.next_threads.clear();
        }

        self.threads.iter().any(|ip| matches!(self.code[*ip], Instr::Accept))
    }
}

/// Structure used by the [`epsilon_closure`] function for maintaining
/// its state during the computation of an epsilon closure.
pub(crate) struct EpsilonClosureState {
    /// Locations that still need to be visited.
    threads: Vec<usize>,
}

impl EpsilonClosureState {
    pub fn new() -> Self {
        Self { threads: Vec::new() }
    }
}

/// Computes the epsilon closure derived from executing the code starting at
/// a given position.
///
/// In a NFA, the epsilon closure of some state `S`, is the set containing all
/// the states that can be reached from `S` by following epsilon transitions
/// (i.e: transitions that don't consume any input symbol). The Pike's VM code
/// produced for a pattern is simply another way of representing a NFA where
/// each instruction is a state. Jumps and forks are the epsilon transitions
/// in this context.
///
/// Every location visited is added to `closure`, including the locations
/// of jumps. A location that is already in `closure` is not explored again,
/// which means that the closures computed for all the threads in a single
/// step share their work, and that loops with an empty body, like the one
/// produced for `(a*)*`, terminate.
///
/// The function guarantees that `state` is empty before returning, and
/// therefore it can be re-used safely.
pub(crate) fn epsilon_closure(
    code: &[Instr],
    start: usize,
    state: &mut EpsilonClosureState,
    closure: &mut ThreadSet,
) {
    state.threads.push(start);

    while let Some(ip) = state.threads.pop() {
        // The code always ends with `Instr::Accept`, no thread can go
        // beyond it.
        if ip >= code.len() || !closure.insert(ip) {
            continue;
        }
        if let Instr::Jump(targets) = &code[ip] {
            // Targets are pushed in reverse order, so that the first
            // target is the first one to be explored.
            for target in targets.iter().rev() {
                state.threads.push(*target);
            }
        }
    }
}
