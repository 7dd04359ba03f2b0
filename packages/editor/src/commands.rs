//! Per-section-kind formatting command tables.
//!
//! Each section kind offers a fixed set of toolbar commands; the
//! surface consults the table before running an operation on a
//! section (e.g. citations only exist in paragraph and quote
//! sections).

use typecase_content::SectionKind;

/// A formatting command a section's toolbar can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Link,
    Reference,
    JustifyLeft,
    JustifyCenter,
    JustifyRight,
    OrderedList,
    UnorderedList,
}

impl FormatCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            FormatCommand::Bold => "bold",
            FormatCommand::Italic => "italic",
            FormatCommand::Underline => "underline",
            FormatCommand::Strikethrough => "strikethrough",
            FormatCommand::Link => "link",
            FormatCommand::Reference => "reference",
            FormatCommand::JustifyLeft => "justifyLeft",
            FormatCommand::JustifyCenter => "justifyCenter",
            FormatCommand::JustifyRight => "justifyRight",
            FormatCommand::OrderedList => "insertOrderedList",
            FormatCommand::UnorderedList => "insertUnorderedList",
        }
    }
}

use FormatCommand::*;

const PARAGRAPH_COMMANDS: &[FormatCommand] = &[
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Link,
    Reference,
    JustifyLeft,
    JustifyCenter,
    JustifyRight,
    OrderedList,
    UnorderedList,
];

const SUBHEADER_COMMANDS: &[FormatCommand] =
    &[Bold, Italic, JustifyLeft, JustifyCenter, JustifyRight];

const QUOTE_COMMANDS: &[FormatCommand] = &[Italic, Link, Reference];

const CODE_COMMANDS: &[FormatCommand] = &[Link];

const CALLOUT_COMMANDS: &[FormatCommand] = &[
    Bold,
    Italic,
    Underline,
    Strikethrough,
    JustifyLeft,
    JustifyCenter,
    JustifyRight,
    OrderedList,
    UnorderedList,
];

/// Commands offered by a section kind's toolbar.
pub fn commands_for(kind: SectionKind) -> &'static [FormatCommand] {
    match kind {
        SectionKind::Paragraph => PARAGRAPH_COMMANDS,
        SectionKind::Subheader => SUBHEADER_COMMANDS,
        SectionKind::Quote => QUOTE_COMMANDS,
        SectionKind::Code => CODE_COMMANDS,
        SectionKind::Callout => CALLOUT_COMMANDS,
        // Image sections use dedicated url/caption controls instead.
        SectionKind::Image | SectionKind::Other => &[],
    }
}

/// Whether a section kind's toolbar offers a command.
pub fn allows(kind: SectionKind, command: FormatCommand) -> bool {
    commands_for(kind).contains(&command)
}
