/// Partition `data` into at most `parts` contiguous line-aligned spans.
///
/// Cut points start at an even stride and advance byte-by-byte to just past
/// the next line terminator, so no span starts or ends mid-record. Spans
/// keep their terminators: concatenating them reproduces `data` exactly.
/// The final span always extends to end of input even without a trailing
/// terminator; empty input yields no spans.
pub fn split_into_chunks(data: &[u8], parts: usize) -> Vec<&[u8]> {
    if data.is_empty() || parts == 0 {
        return Vec::new();
    }

    let stride = data.len().div_ceil(parts);
    let mut chunks = Vec::with_capacity(parts);
    let mut start = 0;
    while start < data.len() {
        let mut end = (start + stride).min(data.len());
        while end < data.len() && data[end - 1] != b'\n' {
            end += 1;
        }
        chunks.push(&data[start..end]);
        start = end;
    }
    chunks
}
