use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Hook called with the bytes of every `append`.
pub type AppendHook = Box<dyn FnMut(&[u8]) + Send>;

/// Hook called when input is finished.
pub type EndHook = Box<dyn FnMut() + Send>;

/// Hook called when a read asked for more bytes than were left.
pub type ExhaustedHook = Box<dyn FnMut(Exhausted) + Send>;

/// Details of a read that ran past the end of the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Exhausted {
    /// Number of bytes asked for.
    pub requested: usize,
    /// Number of bytes actually handed back.
    pub available: usize,
}

/// Registered observers, called synchronously in registration order.
#[derive(Default)]
pub(crate) struct Hooks {
    append: Vec<AppendHook>,
    end: Vec<EndHook>,
    exhausted: Vec<ExhaustedHook>,
}

impl Hooks {
    pub(crate) fn push_append(&mut self, hook: AppendHook) {
        self.append.push(hook);
    }

    pub(crate) fn push_end(&mut self, hook: EndHook) {
        self.end.push(hook);
    }

    pub(crate) fn push_exhausted(&mut self, hook: ExhaustedHook) {
        self.exhausted.push(hook);
    }

    pub(crate) fn notify_append(&mut self, bytes: &[u8]) {
        for hook in &mut self.append {
            hook(bytes);
        }
    }

    pub(crate) fn notify_end(&mut self) {
        for hook in &mut self.end {
            hook();
        }
    }

    pub(crate) fn notify_exhausted(&mut self, event: Exhausted) {
        for hook in &mut self.exhausted {
            hook(event);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("append", &self.append.len())
            .field("end", &self.end.len())
            .field("exhausted", &self.exhausted.len())
            .finish()
    }
}
