//! Builders for the outbound contact links.

/// `mailto:` link with a pre-filled, percent-encoded subject and body.
pub fn mailto_href(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{address}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// WhatsApp click-to-chat link. `phone_digits` is the international number
/// without `+`, spaces or punctuation; non-digits are dropped.
pub fn whatsapp_href(phone_digits: &str, message: &str) -> String {
    let digits: String = phone_digits.chars().filter(char::is_ascii_digit).collect();
    if message.is_empty() {
        format!("https://wa.me/{digits}")
    } else {
        format!("https://wa.me/{digits}?text={}", urlencoding::encode(message))
    }
}
