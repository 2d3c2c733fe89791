//! タグ出力先
//!
//! The scanner hands every finished tag to a [`TagSink`] and never looks at
//! it again.

use alloc::vec::Vec;

use crate::kind::KindSet;
use crate::tag::Tag;

/// Receiver of emitted tags, called once per recognised declaration.
pub trait TagSink {
    fn emit(&mut self, tag: Tag);
}

impl TagSink for Vec<Tag> {
    fn emit(&mut self, tag: Tag) {
        self.push(tag);
    }
}

impl<S: TagSink + ?Sized> TagSink for &mut S {
    fn emit(&mut self, tag: Tag) {
        (**self).emit(tag);
    }
}

/// Closure-backed sink.
pub struct FnSink<F>(pub F);

impl<F: FnMut(Tag)> TagSink for FnSink<F> {
    fn emit(&mut self, tag: Tag) {
        (self.0)(tag);
    }
}

/// Forwards only tags whose kind is enabled.
#[derive(Debug)]
pub struct KindFilter<S> {
    inner: S,
    kinds: KindSet,
}

impl<S: TagSink> KindFilter<S> {
    pub const fn new(inner: S, kinds: KindSet) -> Self {
        Self { inner, kinds }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: TagSink> TagSink for KindFilter<S> {
    fn emit(&mut self, tag: Tag) {
        if self.kinds.contains(tag.kind) {
            self.inner.emit(tag);
        }
    }
}
