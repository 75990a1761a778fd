//! Turns a prefix and a message into the exact bytes of one write.
//!
//! Rendering starts in a fixed-size stack buffer. The formatting pass keeps counting
//! after the buffer is full, so a single pass tells us whether the message fits. When
//! it does not, the message is rendered a second time into a heap buffer of exactly
//! the measured size. Both paths produce the same bytes.

use crate::severity::{Descriptor, Stream};
use std::fmt::{self, Write as _};

/// Stack buffer capacity. Matches `PATH_MAX` on Linux.
pub const RENDER_CAPACITY: usize = 4096;

/// Why a call produced no message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The prefix alone does not fit the stack buffer.
    PrefixOverflow,
    /// A `Display` impl inside the message returned `fmt::Error`.
    Format,
}

/// What happened to one emit call, as seen from inside the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The message fit the stack buffer.
    Stack { len: usize },
    /// The message went through a heap buffer of `len` bytes.
    Heap { len: usize },
    /// Allocation failed; the descriptor's notice was written instead.
    OutOfMemory,
    Fault(Fault),
}

/// Fixed-capacity buffer that measures what it cannot store.
///
/// `len` is what was stored, `required` what the writes asked for. Once they
/// diverge the stored bytes are a truncated prefix and must not be written.
pub struct StackBuffer<const N: usize> {
    bytes: [u8; N],
    len: usize,
    required: usize,
}

impl<const N: usize> Default for StackBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StackBuffer<N> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
            required: 0,
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[must_use]
    pub const fn required(&self) -> usize {
        self.required
    }

    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.required > self.len
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    fn push_byte(&mut self, byte: u8) {
        if self.len < N {
            self.bytes[self.len] = byte;
            self.len += 1;
        }
        self.required += 1;
    }
}

impl<const N: usize> fmt::Write for StackBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = N - self.len;
        let take = s.len().min(room);
        self.bytes[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        self.required += s.len();
        Ok(())
    }
}

/// Heap-side writer: never grows the buffer past `limit`.
struct Bounded<'a> {
    buf: &'a mut Vec<u8>,
    limit: usize,
}

impl fmt::Write for Bounded<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.limit.saturating_sub(self.buf.len());
        let take = s.len().min(room);
        self.buf.extend_from_slice(&s.as_bytes()[..take]);
        Ok(())
    }
}

/// Allocates exactly `len` bytes of capacity, or `None` when the allocator refuses.
#[must_use]
pub fn try_alloc(len: usize) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).ok()?;
    Some(buf)
}

/// Renders `prefix` + `args` (+ `\n` when the descriptor wants one) and hands the
/// bytes to `write` exactly once, tagged with the stream they belong on. Faults write
/// nothing. The caller holds the lock.
///
/// `alloc` is only consulted on the heap path. When it fails, the descriptor's notice
/// goes to its `oom_stream` instead of the message.
pub fn render_and_write<const N: usize>(
    descriptor: &Descriptor,
    prefix: &str,
    args: fmt::Arguments<'_>,
    mut write: impl FnMut(Stream, &[u8]),
    alloc: impl FnOnce(usize) -> Option<Vec<u8>>,
) -> Outcome {
    let mut stack = StackBuffer::<N>::new();

    if stack.write_str(prefix).is_err() || stack.is_truncated() {
        return Outcome::Fault(Fault::PrefixOverflow);
    }
    let prefix_len = stack.required();

    if fmt::write(&mut stack, args).is_err() {
        return Outcome::Fault(Fault::Format);
    }
    let total_len = stack.required();
    let msg_len = total_len - prefix_len;

    if total_len < N {
        if descriptor.newline {
            stack.push_byte(b'\n');
        }
        write(descriptor.stream, stack.as_bytes());
        return Outcome::Stack { len: stack.as_bytes().len() };
    }

    let heap_len = total_len + usize::from(descriptor.newline);
    let Some(mut heap) = alloc(heap_len) else {
        write(descriptor.oom_stream, descriptor.oom_notice.as_bytes());
        return Outcome::OutOfMemory;
    };

    heap.extend_from_slice(prefix.as_bytes());
    let mut writer = Bounded {
        buf: &mut heap,
        limit: prefix_len + msg_len,
    };
    if fmt::write(&mut writer, args).is_err() {
        return Outcome::Fault(Fault::Format);
    }
    if descriptor.newline {
        heap.push(b'\n');
    }
    write(descriptor.stream, &heap);
    Outcome::Heap { len: heap.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::{INFO, WARN};

    fn capture<const N: usize>(
        descriptor: &Descriptor,
        prefix: &str,
        args: fmt::Arguments<'_>,
    ) -> (Outcome, Vec<Vec<u8>>) {
        let mut writes = Vec::new();
        let outcome = render_and_write::<N>(
            descriptor,
            prefix,
            args,
            |stream, b| {
                assert_eq!(stream, descriptor.stream);
                writes.push(b.to_vec());
            },
            try_alloc,
        );
        (outcome, writes)
    }

    struct Failing;

    impl fmt::Display for Failing {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn stack_buffer_counts_past_capacity() {
        let mut buf = StackBuffer::<4>::new();
        buf.write_str("abcdef").unwrap();
        assert_eq!(buf.as_bytes(), b"abcd");
        assert_eq!(buf.required(), 6);
        assert!(buf.is_truncated());
    }

    #[test]
    fn heap_path_matches_unbounded_stack_path() {
        let (small, small_writes) = capture::<32>(
            &WARN,
            WARN.prefix,
            format_args!("value={} and some padding text", 12345),
        );
        let (large, large_writes) = capture::<4096>(
            &WARN,
            WARN.prefix,
            format_args!("value={} and some padding text", 12345),
        );

        assert!(matches!(small, Outcome::Heap { .. }));
        assert!(matches!(large, Outcome::Stack { .. }));
        assert_eq!(small_writes, large_writes);
        assert_eq!(small_writes.len(), 1);
    }

    #[test]
    fn heap_buffer_is_exactly_sized() {
        let (outcome, writes) = capture::<8>(&WARN, "[w]: ", format_args!("0123456789"));
        assert_eq!(outcome, Outcome::Heap { len: 16 });
        assert_eq!(writes, vec![b"[w]: 0123456789\n".to_vec()]);
    }

    #[test]
    fn exact_fit_without_room_for_newline_takes_heap_path() {
        // prefix + message fills all 8 bytes, leaving no slot for '\n'.
        let (outcome, writes) = capture::<8>(&WARN, "[w]: ", format_args!("abc"));
        assert_eq!(outcome, Outcome::Heap { len: 9 });
        assert_eq!(writes, vec![b"[w]: abc\n".to_vec()]);
    }

    #[test]
    fn plain_descriptor_appends_nothing() {
        let (outcome, writes) = capture::<64>(&INFO, "", format_args!("no newline"));
        assert_eq!(outcome, Outcome::Stack { len: 10 });
        assert_eq!(writes, vec![b"no newline".to_vec()]);
    }

    #[test]
    fn oversized_prefix_is_a_fault() {
        let (outcome, writes) = capture::<4>(&WARN, WARN.prefix, format_args!("x"));
        assert_eq!(outcome, Outcome::Fault(Fault::PrefixOverflow));
        assert!(writes.is_empty());
    }

    #[test]
    fn display_error_is_a_fault() {
        let (outcome, writes) = capture::<64>(&WARN, "", format_args!("a{}b", Failing));
        assert_eq!(outcome, Outcome::Fault(Fault::Format));
        assert!(writes.is_empty());
    }

    #[test]
    fn allocation_failure_writes_notice() {
        let mut writes = Vec::new();
        let outcome = render_and_write::<16>(
            &WARN,
            WARN.plain_prefix,
            format_args!("far too long for sixteen bytes"),
            |stream, b| writes.push((stream, b.to_vec())),
            |_| None,
        );
        assert_eq!(outcome, Outcome::OutOfMemory);
        assert_eq!(writes, vec![(Stream::Stderr, WARN.oom_notice.as_bytes().to_vec())]);
    }

    #[test]
    fn plain_allocation_failure_reports_on_stderr() {
        let mut writes = Vec::new();
        let outcome = render_and_write::<8>(
            &INFO,
            "",
            format_args!("does not fit eight bytes"),
            |stream, b| writes.push((stream, b.to_vec())),
            |_| None,
        );
        assert_eq!(outcome, Outcome::OutOfMemory);
        assert_eq!(
            writes,
            vec![(Stream::Stderr, b"out of memory while formatting message".to_vec())]
        );
    }

    #[test]
    fn alloc_is_not_called_on_stack_path() {
        let mut called = false;
        let outcome = render_and_write::<64>(
            &WARN,
            "",
            format_args!("short"),
            |_, _| {},
            |len| {
                called = true;
                try_alloc(len)
            },
        );
        assert_eq!(outcome, Outcome::Stack { len: 6 });
        assert!(!called);
    }
}
