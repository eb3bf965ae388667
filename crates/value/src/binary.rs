//! Byte buffers and typed views.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// A raw byte buffer. `shared` marks the shared-memory flavor, which is a
/// distinct nominal type: a shared and a non-shared buffer never compare
/// equal.
pub struct ByteBuf {
    shared: bool,
    bytes: RefCell<Vec<u8>>,
}

impl ByteBuf {
    /// A zero-filled buffer of `len` bytes.
    pub fn new(len: usize) -> Rc<ByteBuf> {
        ByteBuf::from_bytes(vec![0; len])
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Rc<ByteBuf> {
        Rc::new(ByteBuf {
            shared: false,
            bytes: RefCell::new(bytes),
        })
    }

    pub fn shared_from_bytes(bytes: Vec<u8>) -> Rc<ByteBuf> {
        Rc::new(ByteBuf {
            shared: true,
            bytes: RefCell::new(bytes),
        })
    }

    pub fn is_shared(&self) -> bool {
        self.shared
    }

    pub fn len(&self) -> usize {
        self.bytes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.borrow().is_empty()
    }

    pub fn bytes(&self) -> Ref<'_, Vec<u8>> {
        self.bytes.borrow()
    }

    /// Copies `data` into the buffer at `offset`. Panics when the write
    /// overruns the buffer, like any slice write.
    pub fn write(&self, offset: usize, data: &[u8]) {
        self.bytes.borrow_mut()[offset..offset + data.len()].copy_from_slice(data);
    }
}

/// The element flavor of a view. `DataView` is the untyped flavor; it never
/// matches a typed one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
    BigInt64,
    BigUint64,
    DataView,
}

impl ViewKind {
    pub fn element_size(self) -> usize {
        match self {
            ViewKind::Int8 | ViewKind::Uint8 | ViewKind::Uint8Clamped | ViewKind::DataView => 1,
            ViewKind::Int16 | ViewKind::Uint16 => 2,
            ViewKind::Int32 | ViewKind::Uint32 | ViewKind::Float32 => 4,
            ViewKind::Float64 | ViewKind::BigInt64 | ViewKind::BigUint64 => 8,
        }
    }

    pub fn type_tag(self) -> &'static str {
        match self {
            ViewKind::Int8 => "Int8Array",
            ViewKind::Uint8 => "Uint8Array",
            ViewKind::Uint8Clamped => "Uint8ClampedArray",
            ViewKind::Int16 => "Int16Array",
            ViewKind::Uint16 => "Uint16Array",
            ViewKind::Int32 => "Int32Array",
            ViewKind::Uint32 => "Uint32Array",
            ViewKind::Float32 => "Float32Array",
            ViewKind::Float64 => "Float64Array",
            ViewKind::BigInt64 => "BigInt64Array",
            ViewKind::BigUint64 => "BigUint64Array",
            ViewKind::DataView => "DataView",
        }
    }
}

/// A window over a [`ByteBuf`]. Several views may share one buffer at
/// different offsets.
pub struct BufView {
    kind: ViewKind,
    buf: Rc<ByteBuf>,
    byte_offset: usize,
    byte_length: usize,
}

impl BufView {
    /// Panics when the window overruns the buffer.
    pub fn new(kind: ViewKind, buf: &Rc<ByteBuf>, byte_offset: usize, byte_length: usize) -> Rc<BufView> {
        assert!(byte_offset + byte_length <= buf.len());
        Rc::new(BufView {
            kind,
            buf: buf.clone(),
            byte_offset,
            byte_length,
        })
    }

    /// A view covering the whole buffer.
    pub fn whole(kind: ViewKind, buf: &Rc<ByteBuf>) -> Rc<BufView> {
        let byte_length = buf.len();
        BufView::new(kind, buf, 0, byte_length)
    }

    /// A view over a fresh buffer holding `bytes`.
    pub fn of_bytes(kind: ViewKind, bytes: Vec<u8>) -> Rc<BufView> {
        BufView::whole(kind, &ByteBuf::from_bytes(bytes))
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn buf(&self) -> &Rc<ByteBuf> {
        &self.buf
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// Element count of the window.
    pub fn len(&self) -> usize {
        self.byte_length / self.kind.element_size()
    }

    pub fn is_empty(&self) -> bool {
        self.byte_length == 0
    }

    /// The viewed byte range.
    pub fn bytes(&self) -> Ref<'_, [u8]> {
        Ref::map(self.buf.bytes(), |bytes| {
            &bytes[self.byte_offset..self.byte_offset + self.byte_length]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_windows_the_buffer() {
        let buf = ByteBuf::from_bytes(vec![1, 2, 3, 4, 5]);
        let view = BufView::new(ViewKind::Uint8, &buf, 1, 3);
        assert_eq!(&*view.bytes(), &[2, 3, 4]);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn element_len_scales_with_kind() {
        let view = BufView::of_bytes(ViewKind::Int32, vec![0; 8]);
        assert_eq!(view.len(), 2);
        assert_eq!(view.byte_length(), 8);
    }

    #[test]
    fn write_mutates_through_views() {
        let buf = ByteBuf::new(4);
        let view = BufView::whole(ViewKind::Uint8, &buf);
        buf.write(2, &[9]);
        assert_eq!(&*view.bytes(), &[0, 0, 9, 0]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_view_panics() {
        let buf = ByteBuf::new(2);
        let _ = BufView::new(ViewKind::Uint8, &buf, 1, 2);
    }
}
