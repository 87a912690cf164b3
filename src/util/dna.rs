pub const SIGMA: usize = 6; // {0:$, 1:A, 2:C, 3:G, 4:T, 5:N}

#[inline]
pub fn to_alphabet(b: u8) -> u8 {
    if b == 0 { return 0; }
    match b.to_ascii_uppercase() {
        b'A' => 1,
        b'C' => 2,
        b'G' => 3,
        b'T' | b'U' => 4,
        b'N' => 5,
        _ => 5, // map others to N
    }
}

#[inline]
pub fn from_alphabet(a: u8) -> u8 {
    match a {
        0 => 0,
        1 => b'A',
        2 => b'C',
        3 => b'G',
        4 => b'T',
        5 => b'N',
        _ => b'N',
    }
}

pub fn normalize_seq(seq: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len());
    for &b in seq {
        let up = b.to_ascii_uppercase();
        let nb = match up {
            b'A' | b'C' | b'G' | b'T' | b'N' => up,
            b'U' => b'T',
            _ => b'N',
        };
        out.push(nb);
    }
    out
}

/// 规范化并编码为数值字母表，一步到位。查询与参考走同一条编码路径，
/// 保证比较时符号口径一致（N 只等于 N）。
pub fn encode_seq(seq: &[u8]) -> Vec<u8> {
    normalize_seq(seq).iter().map(|&b| to_alphabet(b)).collect()
}

pub fn decode_seq(alpha: &[u8]) -> Vec<u8> {
    alpha.iter().map(|&a| from_alphabet(a)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_maps_into_alphabet_range() {
        let codes = encode_seq(b"acgtUnX");
        assert_eq!(codes, vec![1, 2, 3, 4, 4, 5, 5]);
        assert!(codes.iter().all(|&c| (c as usize) < SIGMA && c != 0));
    }

    #[test]
    fn decode_inverts_encode_for_canonical_bases() {
        assert_eq!(decode_seq(&encode_seq(b"ACGTN")), b"ACGTN");
    }
}
