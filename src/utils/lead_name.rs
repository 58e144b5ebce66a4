/// Resultado de la validación del nombre
///
/// Always returned as data, never as an error, so form code can bind the
/// message directly.
#[derive(Debug, Clone, PartialEq)]
pub struct NameCheck {
    pub valid: bool,
    pub message: String,
}

impl NameCheck {
    fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
        }
    }
}

fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Chinese name: 1 to 3 CJK chars, middle dot allowed
fn is_chinese_name(name: &str) -> bool {
    let count = name.chars().count();
    (1..=3).contains(&count) && name.chars().all(|c| is_cjk(c) || c == '·')
}

/// English name: leading letter, then up to 19 letters/spaces/'-/. chars
fn is_english_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    let rest: Vec<char> = chars.collect();
    rest.len() <= 19
        && rest
            .iter()
            .all(|c| c.is_ascii_alphabetic() || c.is_ascii_whitespace() || matches!(c, '\'' | '.' | '-'))
}

/// Validate a lead (customer) name.
///
/// Accepts Chinese names up to 3 characters or English names up to 20
/// characters, mirroring what the backend enforces on create/update.
pub fn validate_lead_name(name: &str) -> NameCheck {
    let value = name.trim();
    if value.is_empty() {
        return NameCheck::fail("客户姓名不能为空");
    }

    if is_chinese_name(value) || is_english_name(value) {
        return NameCheck::ok();
    }

    NameCheck::fail("客户姓名仅支持中文(最多3字)或英文(最多20字符)")
}
