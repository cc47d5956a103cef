/// Groups thousands the French way: `12345` becomes `"12 345"`.
pub fn format_volume(volume: u64) -> String {
    let digits = volume.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
