//! # Editable Surface
//!
//! Headless model of the post editor: metadata inputs, an ordered
//! list of section views, and the event queue the host drains.
//!
//! The discipline is read-then-fully-rebuild: every externally
//! observable change re-derives the whole document from the live
//! surface (`collect`), and loading a document rebuilds the surface
//! wholesale (`set_document`). There is no incremental diffing —
//! posts are short-form content and the full walk is deliberate.

use std::collections::VecDeque;

use tracing::debug;
use typecase_content::{
    parse_fragment, to_editable, Document, DomElement, Node, RefKind, Section, SectionKind,
};

use crate::commands::{allows, FormatCommand};
use crate::errors::EditorError;
use crate::events::EditorEvent;
use crate::reference::ReferenceSource;
use crate::sections::{SectionView, CODE_LANGUAGES};

/// The editable surface for one post.
#[derive(Debug, Default)]
pub struct EditorSurface {
    title: String,
    summary: String,
    /// Raw comma-separated tag input, split only at collection time.
    tags_input: String,
    sections: Vec<SectionView>,
    events: VecDeque<EditorEvent>,
}

impl EditorSurface {
    pub fn new() -> Self {
        Self::default()
    }

    // Metadata inputs. Typing does not notify; the next collect picks
    // the values up.

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = summary.into();
    }

    pub fn set_tags_input(&mut self, tags: impl Into<String>) {
        self.tags_input = tags.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn tags_input(&self) -> &str {
        &self.tags_input
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn section(&self, index: usize) -> Option<&SectionView> {
        self.sections.get(index)
    }

    /// Append a new empty section; returns its index.
    pub fn add_section(&mut self, kind: SectionKind) -> usize {
        debug!(kind = %kind, "add section");
        self.sections.push(SectionView::new(kind));
        self.notify_update();
        self.sections.len() - 1
    }

    /// Remove the section at `index`.
    pub fn remove_section(&mut self, index: usize) -> Result<(), EditorError> {
        if index >= self.sections.len() {
            return Err(EditorError::SectionOutOfRange(index));
        }
        debug!(index, "remove section");
        self.sections.remove(index);
        self.notify_update();
        Ok(())
    }

    /// Move the section at `index` by `delta` positions. A move whose
    /// target falls off either end is a silent no-op (the update
    /// still fires, matching a click on a disabled-edge control).
    pub fn move_section(&mut self, index: usize, delta: isize) -> Result<(), EditorError> {
        if index >= self.sections.len() {
            return Err(EditorError::SectionOutOfRange(index));
        }

        let target = index as isize + delta;
        if target >= 0 && (target as usize) < self.sections.len() {
            debug!(index, target, "move section");
            let view = self.sections.remove(index);
            self.sections.insert(target as usize, view);
        }
        self.notify_update();
        Ok(())
    }

    /// Run an edit against a section's content area (the headless
    /// analog of the user typing into it), then notify.
    pub fn edit_section(
        &mut self,
        index: usize,
        edit: impl FnOnce(&mut DomElement),
    ) -> Result<(), EditorError> {
        let view = self
            .sections
            .get_mut(index)
            .ok_or(EditorError::SectionOutOfRange(index))?;
        edit(view.content_mut());
        self.notify_update();
        Ok(())
    }

    /// Select the code language of a code section.
    pub fn set_language(&mut self, index: usize, language: &str) -> Result<(), EditorError> {
        let view = self
            .sections
            .get_mut(index)
            .ok_or(EditorError::SectionOutOfRange(index))?;

        if view.kind != SectionKind::Code {
            return Err(EditorError::SectionKindMismatch {
                expected: SectionKind::Code,
                found: view.kind,
            });
        }
        if !CODE_LANGUAGES.contains(&language) {
            return Err(EditorError::UnknownLanguage(language.to_string()));
        }

        view.language = Some(language.to_string());
        self.notify_update();
        Ok(())
    }

    /// Capture a citation through the injected source and append its
    /// marker to the section's content area. Rejection or an invalid
    /// reference kind aborts without touching the tree.
    pub fn insert_reference(
        &mut self,
        index: usize,
        source: &mut dyn ReferenceSource,
    ) -> Result<(), EditorError> {
        let view = self
            .sections
            .get(index)
            .ok_or(EditorError::SectionOutOfRange(index))?;

        if !allows(view.kind, FormatCommand::Reference) {
            return Err(EditorError::CommandNotAvailable {
                command: "reference",
                kind: view.kind,
            });
        }

        let input = source.collect_reference()?;
        let ref_kind = RefKind::parse(&input.ref_kind)
            .ok_or_else(|| EditorError::InvalidReferenceKind(input.ref_kind.clone()))?;

        let marker = to_editable(&Node::reference(input.ref_id, ref_kind, input.ref_content));
        self.sections[index].content_mut().append_fragment(marker);
        self.notify_update();
        Ok(())
    }

    /// Append an inline image to an image section.
    pub fn insert_image(
        &mut self,
        index: usize,
        url: impl Into<String>,
        alt: impl Into<String>,
    ) -> Result<(), EditorError> {
        let view = self
            .sections
            .get_mut(index)
            .ok_or(EditorError::SectionOutOfRange(index))?;

        if view.kind != SectionKind::Image {
            return Err(EditorError::SectionKindMismatch {
                expected: SectionKind::Image,
                found: view.kind,
            });
        }

        let fragment = to_editable(&Node::image(url.into(), alt.into()));
        view.content_mut().append_fragment(fragment);
        self.notify_update();
        Ok(())
    }

    /// Load a document wholesale: clears the surface and rebuilds
    /// every section from its serialized content.
    pub fn set_document(&mut self, doc: &Document) {
        debug!(sections = doc.sections.len(), "populate surface");

        self.title = doc.title.clone();
        self.summary = doc.summary.clone();
        self.tags_input = doc.tags.join(", ");

        self.sections.clear();
        for section in &doc.sections {
            let mut view = SectionView::new(section.kind);
            view.language = section.language.clone();
            view.content_mut()
                .append_fragment(to_editable(&section.content));
            self.sections.push(view);
        }

        self.notify_update();
    }

    /// Derive the full document from the live surface. Section order
    /// indexes come from live position; tags are split on comma and
    /// trimmed (empty strings are kept — callers filter downstream).
    pub fn collect(&self) -> Document {
        Document {
            title: self.title.clone(),
            summary: self.summary.clone(),
            tags: self
                .tags_input
                .split(',')
                .map(|tag| tag.trim().to_string())
                .collect(),
            sections: self
                .sections
                .iter()
                .enumerate()
                .map(|(index, view)| Section {
                    kind: view.kind,
                    language: view.language.clone(),
                    content: parse_fragment(&view.content().children),
                    order_index: index,
                })
                .collect(),
            ..Document::default()
        }
    }

    /// Explicit user save request.
    pub fn save(&mut self) {
        let doc = self.collect();
        debug!(title = %doc.title, "save requested");
        self.events.push_back(EditorEvent::Save(doc));
    }

    /// Reset the surface to its pristine state.
    pub fn reset(&mut self) {
        self.title.clear();
        self.summary.clear();
        self.tags_input.clear();
        self.sections.clear();
        self.notify_update();
    }

    /// Take all queued notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        self.events.drain(..).collect()
    }

    fn notify_update(&mut self) {
        let doc = self.collect();
        self.events.push_back(EditorEvent::Update(doc));
    }
}
