/// Named string transform applied to a field's text at encode time.
///
/// Selected by the second segment of the field tag. Masking is lossy:
/// a transformed column does not decode back to the original value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// `phone_desensitization`
    PhoneDesensitization,
    /// `email_desensitization`
    EmailDesensitization,
}

impl Transform {
    pub const ALL: [Transform; 2] = [Transform::PhoneDesensitization, Transform::EmailDesensitization];

    /// Look up a transform by its tag name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Transform::PhoneDesensitization => "phone_desensitization",
            Transform::EmailDesensitization => "email_desensitization",
        }
    }

    /// Apply to the stringified value. Values the mask does not apply to are returned unchanged.
    pub fn apply(self, value: String) -> String {
        let masked = match self {
            Transform::PhoneDesensitization => mask_phone(&value),
            Transform::EmailDesensitization => mask_email(&value),
        };
        masked.unwrap_or(value)
    }
}

/// Fixed-window phone mask over codepoints: `[0..3] + "****" + [7..]`.
///
/// Codepoints 3..7 are dropped, so the result is not length-preserving.
/// `None` when the value has 6 codepoints or fewer.
pub fn mask_phone(value: &str) -> Option<String> {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 6 {
        return None;
    }

    let mut masked: String = chars[..3].iter().collect();
    masked.push_str("****");
    masked.extend(&chars[7..]);
    Some(masked)
}

/// Email mask: local part becomes first 2 codepoints + `"***"` + last codepoint.
///
/// `None` unless the value splits on `@` into exactly two non-empty parts
/// and the local part is longer than 3 codepoints.
pub fn mask_email(value: &str) -> Option<String> {
    let mut parts = value.split('@');
    let (Some(user), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    if user.is_empty() || domain.is_empty() {
        return None;
    }

    let user: Vec<char> = user.chars().collect();
    if user.len() <= 3 {
        return None;
    }

    let mut masked: String = user[..2].iter().collect();
    masked.push_str("***");
    masked.push(user[user.len() - 1]);
    masked.push('@');
    masked.push_str(domain);
    Some(masked)
}
