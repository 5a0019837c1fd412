//! Declarative form validation.
//!
//! # Design
//! - Each form is described by a static [`Schema`] of field rules.
//! - Forms expose their values through [`FormFields`]; the schema never sees
//!   concrete form types.
//! - All failing fields are collected, in schema order, so a form can show
//!   every message at once while toasts use the first.

use std::fmt;

/// A single check applied to a field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Text must be non-blank.
    Required,
    /// Trimmed text must have at least this many characters.
    MinLength(usize),
    /// Trimmed text must have at most this many characters.
    MaxLength(usize),
    /// Text must look like an email address when present.
    Email,
    /// At least one file must be attached.
    FileRequired,
}

/// Rules for one named field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as exposed by [`FormFields`].
    pub name: &'static str,
    /// Label used in messages.
    pub label: &'static str,
    /// Checks applied in order; the first failure wins.
    pub rules: &'static [Rule],
}

/// Ordered field rules for a form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schema {
    /// Form name used in logs.
    pub form: &'static str,
    /// Field rules in display order.
    pub fields: &'static [FieldSpec],
}

/// Value of a single form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Text input.
    Text(&'a str),
    /// File input with the number of selected files.
    Files(usize),
    /// Field not present on this form.
    Missing,
}

/// Access to a form's current values by field name.
pub trait FormFields {
    /// Current value of `name`.
    fn field(&self, name: &str) -> FieldValue<'_>;
}

/// One failing field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// Field name.
    pub field: &'static str,
    /// Display message.
    pub message: String,
}

/// Collected validation failures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// All failures in schema order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Message for the first failing field.
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.0.first().map(|err| err.message.as_str())
    }

    /// Message for a specific field, if it failed.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|err| err.field == field)
            .map(|err| err.message.as_str())
    }

    /// True when nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} invalid field(s)", self.0.len())
    }
}

impl Schema {
    /// Apply every field's rules to `form`.
    ///
    /// # Errors
    /// Returns all failing fields when at least one rule fails.
    pub fn validate(&self, form: &impl FormFields) -> Result<(), ValidationErrors> {
        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .filter_map(|spec| {
                check_field(spec, form.field(spec.name)).map(|message| FieldError {
                    field: spec.name,
                    message,
                })
            })
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

fn check_field(spec: &FieldSpec, value: FieldValue<'_>) -> Option<String> {
    spec.rules.iter().find_map(|rule| check_rule(spec.label, *rule, value))
}

fn check_rule(label: &str, rule: Rule, value: FieldValue<'_>) -> Option<String> {
    let text = match value {
        FieldValue::Text(text) => text.trim(),
        FieldValue::Files(count) => {
            return (rule == Rule::FileRequired && count == 0)
                .then(|| format!("{label} is required"));
        }
        FieldValue::Missing => {
            return matches!(rule, Rule::Required | Rule::FileRequired)
                .then(|| format!("{label} is required"));
        }
    };
    match rule {
        Rule::Required if text.is_empty() => Some(format!("{label} is required")),
        Rule::MinLength(min) if !text.is_empty() && text.chars().count() < min => {
            Some(format!("{label} must be at least {min} characters"))
        }
        Rule::MaxLength(max) if text.chars().count() > max => {
            Some(format!("{label} must be at most {max} characters"))
        }
        Rule::Email if !text.is_empty() && !looks_like_email(text) => {
            Some(format!("{label} must be a valid email address"))
        }
        _ => None,
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Account registration.
pub const REGISTER: Schema = Schema {
    form: "register",
    fields: &[
        FieldSpec {
            name: "fullName",
            label: "FullName",
            rules: &[Rule::Required, Rule::MaxLength(80)],
        },
        FieldSpec {
            name: "username",
            label: "Username",
            rules: &[Rule::Required, Rule::MaxLength(40)],
        },
        FieldSpec {
            name: "email",
            label: "Email",
            rules: &[Rule::Required, Rule::Email],
        },
        FieldSpec {
            name: "password",
            label: "Password",
            rules: &[Rule::Required],
        },
        FieldSpec {
            name: "avatar",
            label: "Avatar",
            rules: &[Rule::FileRequired],
        },
    ],
};

/// Login by username or email.
pub const LOGIN: Schema = Schema {
    form: "login",
    fields: &[
        FieldSpec {
            name: "identifier",
            label: "Username or email",
            rules: &[Rule::Required],
        },
        FieldSpec {
            name: "password",
            label: "Password",
            rules: &[Rule::Required],
        },
    ],
};

/// Password change.
pub const CHANGE_PASSWORD: Schema = Schema {
    form: "change_password",
    fields: &[
        FieldSpec {
            name: "oldPassword",
            label: "Current password",
            rules: &[Rule::Required],
        },
        FieldSpec {
            name: "newPassword",
            label: "New password",
            rules: &[Rule::Required, Rule::MinLength(6)],
        },
    ],
};

/// Personal details editor.
pub const UPDATE_ACCOUNT: Schema = Schema {
    form: "update_account",
    fields: &[
        FieldSpec {
            name: "fullName",
            label: "FullName",
            rules: &[Rule::Required],
        },
        FieldSpec {
            name: "email",
            label: "Email",
            rules: &[Rule::Required, Rule::Email],
        },
    ],
};

/// Playlist create and edit.
pub const PLAYLIST: Schema = Schema {
    form: "playlist",
    fields: &[
        FieldSpec {
            name: "name",
            label: "Name",
            rules: &[Rule::Required, Rule::MaxLength(100)],
        },
        FieldSpec {
            name: "description",
            label: "Description",
            rules: &[Rule::Required],
        },
    ],
};

/// Tweet and comment bodies.
pub const CONTENT: Schema = Schema {
    form: "content",
    fields: &[FieldSpec {
        name: "content",
        label: "Content",
        rules: &[Rule::Required],
    }],
};

/// Body of a tweet or comment composer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentForm {
    /// Text as typed.
    pub content: String,
}

impl ContentForm {
    /// Form holding `content`.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Wire body with surrounding whitespace removed.
    #[must_use]
    pub fn to_request(&self) -> vidtube_api_models::ContentRequest {
        vidtube_api_models::ContentRequest {
            content: self.content.trim().to_string(),
        }
    }
}

impl FormFields for ContentForm {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "content" => FieldValue::Text(&self.content),
            _ => FieldValue::Missing,
        }
    }
}

/// New video upload.
pub const PUBLISH_VIDEO: Schema = Schema {
    form: "publish_video",
    fields: &[
        FieldSpec {
            name: "title",
            label: "Title",
            rules: &[Rule::Required],
        },
        FieldSpec {
            name: "description",
            label: "Description",
            rules: &[Rule::Required],
        },
        FieldSpec {
            name: "videoFile",
            label: "Video",
            rules: &[Rule::FileRequired],
        },
        FieldSpec {
            name: "thumbnail",
            label: "Thumbnail",
            rules: &[Rule::FileRequired],
        },
    ],
};

/// Video metadata edit.
pub const UPDATE_VIDEO: Schema = Schema {
    form: "update_video",
    fields: &[
        FieldSpec {
            name: "title",
            label: "Title",
            rules: &[Rule::Required],
        },
        FieldSpec {
            name: "description",
            label: "Description",
            rules: &[Rule::Required],
        },
        FieldSpec {
            name: "thumbnail",
            label: "Thumbnail",
            rules: &[Rule::FileRequired],
        },
    ],
};

/// Avatar or cover image replacement.
pub const IMAGE_UPLOAD: Schema = Schema {
    form: "image_upload",
    fields: &[FieldSpec {
        name: "image",
        label: "Image",
        rules: &[Rule::FileRequired],
    }],
};
