/// Printable ASCII (0x20..=0x7e) plus \t, \n and \r.
pub fn is_allowed(b: u8) -> bool {
    matches!(b, 0x09 | 0x0a | 0x0d | 0x20..=0x7e)
}

pub fn sanitize_bytes(input: &[u8]) -> Vec<u8> {
    input.iter().copied().filter(|&b| is_allowed(b)).collect()
}
