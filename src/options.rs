use std::fmt;

/// A single option letter as it appears in `(?imnsx-imnsx)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InlineOption {
    CaseInsensitive,
    Multiline,
    ExplicitCapture,
    Singleline,
    FreeSpacing,
}

impl InlineOption {
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'i' => Some(InlineOption::CaseInsensitive),
            'm' => Some(InlineOption::Multiline),
            'n' => Some(InlineOption::ExplicitCapture),
            's' => Some(InlineOption::Singleline),
            'x' => Some(InlineOption::FreeSpacing),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            InlineOption::CaseInsensitive => 'i',
            InlineOption::Multiline => 'm',
            InlineOption::ExplicitCapture => 'n',
            InlineOption::Singleline => 's',
            InlineOption::FreeSpacing => 'x',
        }
    }
}

impl fmt::Display for InlineOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InlineOption::CaseInsensitive => "ignore case",
            InlineOption::Multiline => "multiline",
            InlineOption::ExplicitCapture => "explicit capture",
            InlineOption::Singleline => "single line",
            InlineOption::FreeSpacing => "ignore pattern whitespace",
        })
    }
}

/// The options switched on and off by an inline options construct.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionChange {
    pub enable: Vec<InlineOption>,
    pub disable: Vec<InlineOption>,
}

impl fmt::Display for OptionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |options: &[InlineOption]| {
            options
                .iter()
                .map(|o| o.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        match (self.enable.is_empty(), self.disable.is_empty()) {
            (false, true) => write!(f, "enable {}", join(&self.enable)),
            (true, false) => write!(f, "disable {}", join(&self.disable)),
            _ => write!(
                f,
                "enable {}; disable {}",
                join(&self.enable),
                join(&self.disable)
            ),
        }
    }
}

/// Flags accepted alongside a pattern.
///
/// Only `explicit_capture` and `free_spacing` change how a pattern parses; the
/// rest are carried for the matching engine and accepted as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegexOptions {
    pub case_insensitive: bool,
    pub multiline: bool,
    pub singleline: bool,
    pub explicit_capture: bool,
    pub free_spacing: bool,
}

impl RegexOptions {
    pub fn with(mut self, option: InlineOption) -> Self {
        self.set(option, true);
        self
    }

    pub fn is_set(&self, option: InlineOption) -> bool {
        match option {
            InlineOption::CaseInsensitive => self.case_insensitive,
            InlineOption::Multiline => self.multiline,
            InlineOption::ExplicitCapture => self.explicit_capture,
            InlineOption::Singleline => self.singleline,
            InlineOption::FreeSpacing => self.free_spacing,
        }
    }

    pub fn apply(&mut self, change: &OptionChange) {
        for &option in &change.enable {
            self.set(option, true);
        }
        for &option in &change.disable {
            self.set(option, false);
        }
    }

    fn set(&mut self, option: InlineOption, value: bool) {
        let flag = match option {
            InlineOption::CaseInsensitive => &mut self.case_insensitive,
            InlineOption::Multiline => &mut self.multiline,
            InlineOption::ExplicitCapture => &mut self.explicit_capture,
            InlineOption::Singleline => &mut self.singleline,
            InlineOption::FreeSpacing => &mut self.free_spacing,
        };
        *flag = value;
    }
}
