//! Reversible share-code scheme for replayable runs.
//! Code format: BRW-<WORD><NN>, e.g., BRW-SAGE42, BRW-HEMLOCK07

fn fnv1a64(bytes: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;
    let mut hash = FNV_OFFSET;
    for b in bytes {
        hash = (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME);
    }
    hash
}

fn sanitize_word(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

// Word list for share codes
pub const WORD_LIST: [&str; 48] = [
    "SAGE", "HEMLOCK", "MANDRAKE", "WORMWOOD", "NETTLE", "YARROW", "MUGWORT", "SORREL",
    "BRYONY", "HENBANE", "VALERIAN", "COMFREY", "FEVERFEW", "TANSY", "RUE", "DILL",
    "CAULDRON", "PHIAL", "ALEMBIC", "MORTAR", "PESTLE", "LADLE", "TINCTURE", "SALVE",
    "ELIXIR", "PHILTRE", "DRAUGHT", "POTION", "BREW", "DECOCT", "INFUSE", "DISTILL",
    "MOON", "EMBER", "FROST", "GRAVE", "HOLY", "VENOM", "SHADE", "GLOOM",
    "GUILD", "PERMIT", "WATCH", "RAID", "BRIBE", "TITHE", "RIVAL", "SHOPPE",
];

#[inline]
fn pack(word_index: u16, nn: u8) -> u16 {
    word_index & 0x003F | ((u16::from(nn) & 0x7F) << 6)
}

#[inline]
fn unpack(packed: u16) -> (u16, u8) {
    (packed & 0x003F, ((packed >> 6) & 0x7F) as u8)
}

fn compose_seed(word_index: u16, nn: u8) -> u64 {
    let packed = pack(word_index, nn);
    // Domain-separated FNV input
    let mut buf = [0u8; 10];
    buf[..7].copy_from_slice(b"HEXBRW-");
    buf[7] = (packed & 0xFF) as u8;
    buf[8] = (packed >> 8) as u8;
    buf[9] = 0x5A;
    let h = fnv1a64(&buf);
    (h & 0xFFFF_FFFF_FFFF_0000) | u64::from(packed)
}

#[must_use]
pub fn encode_friendly(seed: u64) -> String {
    let packed = (seed & 0xFFFF) as u16;
    let (wi, mut nn) = unpack(packed);
    let word = WORD_LIST.get(wi as usize).copied().unwrap_or("SAGE");
    if nn > 99 {
        nn %= 100;
    }
    format!("BRW-{word}{nn:02}")
}

#[must_use]
pub fn decode_to_seed(code: &str) -> Option<u64> {
    let s = code.trim();
    let (prefix, rest) = s.split_once('-')?;
    if !prefix.eq_ignore_ascii_case("BRW") {
        return None;
    }
    if rest.len() < 3 {
        return None;
    }
    let (word_part, nn_part) = rest.split_at(rest.len() - 2);
    let nn: u8 = nn_part.parse().ok()?;
    let word = sanitize_word(word_part);
    let idx = WORD_LIST.iter().position(|w| sanitize_word(w) == word)?;
    let wi = u16::try_from(idx).ok()?;
    Some(compose_seed(wi, nn))
}

#[must_use]
pub fn generate_code_from_entropy(entropy: u64) -> String {
    let wi = u16::try_from(entropy % WORD_LIST.len() as u64).unwrap_or(0);
    let nn = ((entropy >> 17) % 100) as u8;
    let seed = compose_seed(wi, nn);
    encode_friendly(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrips_code() {
        let seed = 0xDEAD_BEEF_CAFE_BABE;
        let code = encode_friendly(seed);
        let new_seed = decode_to_seed(&code).unwrap();
        assert_eq!(encode_friendly(new_seed), code);
    }

    #[test]
    fn brw_sage_42_stable() {
        let seed = decode_to_seed("BRW-SAGE42").unwrap();
        assert_eq!(encode_friendly(seed), "BRW-SAGE42");
    }

    #[test]
    fn wrong_prefix_is_rejected() {
        assert!(decode_to_seed("XYZ-SAGE42").is_none());
        assert!(decode_to_seed("BRW-NOTAWORD42").is_none());
        assert!(decode_to_seed("BRW-S4").is_none());
    }

    #[test]
    fn entropy_codes_are_decodable() {
        for entropy in [0u64, 1, 0xFFFF, 0x1234_5678_9ABC] {
            let code = generate_code_from_entropy(entropy);
            assert!(decode_to_seed(&code).is_some(), "bad code {code}");
        }
    }
}
