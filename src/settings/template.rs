use std::{fmt, str::FromStr};

/// Placeholder tokens accepted in organize naming templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateToken {
    /// 16-digit hexadecimal title id.
    TitleId,

    /// Title name from the catalog.
    TitleName,

    /// DLC name; empty for base games and updates.
    DlcName,

    /// Numeric version.
    Version,

    /// Catalog region.
    Region,

    /// Human-readable version, e.g. `1.0.2`.
    VersionText,

    /// Content type: base, update or DLC.
    Type,
}

impl TemplateToken {
    /// Every token, in the order they are documented.
    pub const ALL: [TemplateToken; 7] = [
        TemplateToken::TitleId,
        TemplateToken::TitleName,
        TemplateToken::DlcName,
        TemplateToken::Version,
        TemplateToken::Region,
        TemplateToken::VersionText,
        TemplateToken::Type,
    ];

    /// Name used between the braces of a template.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateToken::TitleId => "TITLE_ID",
            TemplateToken::TitleName => "TITLE_NAME",
            TemplateToken::DlcName => "DLC_NAME",
            TemplateToken::Version => "VERSION",
            TemplateToken::Region => "REGION",
            TemplateToken::VersionText => "VERSION_TXT",
            TemplateToken::Type => "TYPE",
        }
    }
}

impl fmt::Display for TemplateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateToken {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateToken::ALL
            .into_iter()
            .find(|token| token.as_str() == s)
            .ok_or_else(|| format!("unknown template placeholder '{s}'"))
    }
}

/// A file or folder naming template such as `{TITLE_NAME} [{TITLE_ID}]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate<'a> {
    raw: &'a str,
}

enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

impl<'a> NameTemplate<'a> {
    /// Wraps a template string.
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// Known tokens in order of appearance.
    pub fn tokens(&self) -> Vec<TemplateToken> {
        self.segments()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => name.parse().ok(),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Placeholder names that do not match any [`TemplateToken`].
    pub fn unknown_placeholders(&self) -> Vec<String> {
        self.segments()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) if name.parse::<TemplateToken>().is_err() => {
                    Some(name.to_string())
                }
                _ => None,
            })
            .collect()
    }

    /// Substitutes every known token with the value `lookup` returns for it.
    ///
    /// Tokens without a value render as empty text; unknown placeholders are
    /// kept verbatim.
    pub fn render<F>(&self, lookup: F) -> String
    where
        F: Fn(TemplateToken) -> Option<String>,
    {
        let mut rendered = String::with_capacity(self.raw.len());

        for segment in self.segments() {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Placeholder(name) => match name.parse::<TemplateToken>() {
                    Ok(token) => rendered.push_str(&lookup(token).unwrap_or_default()),
                    Err(_) => {
                        rendered.push('{');
                        rendered.push_str(name);
                        rendered.push('}');
                    }
                },
            }
        }

        rendered
    }

    fn segments(&self) -> impl Iterator<Item = Segment<'a>> {
        let mut rest = self.raw;

        std::iter::from_fn(move || {
            if rest.is_empty() {
                return None;
            }

            let Some(open) = rest.find('{') else {
                let literal = rest;
                rest = "";
                return Some(Segment::Literal(literal));
            };

            if open > 0 {
                let literal = &rest[..open];
                rest = &rest[open..];
                return Some(Segment::Literal(literal));
            }

            match rest[1..].find(['{', '}']) {
                Some(close) if rest.as_bytes()[close + 1] == b'}' => {
                    let name = &rest[1..close + 1];
                    rest = &rest[close + 2..];
                    Some(Segment::Placeholder(name))
                }
                Some(next_open) => {
                    let literal = &rest[..next_open + 1];
                    rest = &rest[next_open + 1..];
                    Some(Segment::Literal(literal))
                }
                None => {
                    let literal = rest;
                    rest = "";
                    Some(Segment::Literal(literal))
                }
            }
        })
    }
}
