/// Decodes file bytes as UTF-8 without failing.
///
/// Invalid byte sequences are dropped, and `\r\n` or a lone `\r` become `\n`, so a file
/// with a broken encoding still contributes whatever text it has.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    normalize_newlines(text)
}

fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
