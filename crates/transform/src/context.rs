use entries::{
    available_locales, resolve_revision, ContentStore, Entry, EntryId, Locale, PreviewRequest,
    Resolved, StatusFilter,
};
use images::ImageUrlBuilder;

use crate::error::TransformResult;
use crate::translate::Translator;

/// Per-request collaborators handed to every transformer.
#[derive(Clone, Copy)]
pub struct TransformContext<'a> {
    pub store: &'a dyn ContentStore,
    pub images: &'a ImageUrlBuilder,
    pub translator: &'a Translator,
    pub locale: Locale,
    pub preview: &'a PreviewRequest,
}

impl<'a> TransformContext<'a> {
    pub fn new(
        store: &'a dyn ContentStore,
        images: &'a ImageUrlBuilder,
        translator: &'a Translator,
        locale: Locale,
        preview: &'a PreviewRequest,
    ) -> Self {
        Self {
            store,
            images,
            translator,
            locale,
            preview,
        }
    }

    /// Swap in the requested draft/version of `entry`, if any.
    pub fn resolve(&self, entry: Entry) -> TransformResult<Resolved> {
        Ok(resolve_revision(self.store, entry, self.preview)?)
    }

    pub fn available_locales(&self, entry_id: EntryId) -> TransformResult<Vec<Locale>> {
        Ok(available_locales(self.store, entry_id, self.locale)?)
    }

    pub fn translate(&self, message: &str) -> String {
        self.translator.translate(self.locale, message)
    }

    /// Site-relative link to `uri` in the request locale.
    pub fn link_for(&self, uri: &str) -> String {
        self.locale.path_for(uri)
    }

    /// Related entries in the request locale, in the given order.
    pub fn related(&self, ids: &[EntryId], status: StatusFilter) -> TransformResult<Vec<Entry>> {
        Ok(self.store.related(ids, self.locale, status)?)
    }
}
