/// Complement a single nucleotide. Anything other than `A`, `C`, `G` or `T` is passed through.
#[inline]
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        _ => base,
    }
}

pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&base| complement(base)).collect()
}

/// Holds the query, the reference and the reference's reverse complement.
///
/// The reverse complement is computed once on construction and never changes afterwards.
#[derive(Debug, Clone)]
pub struct SequenceStore {
    query: Vec<u8>,
    reference: Vec<u8>,
    reference_rc: Vec<u8>,
}

impl SequenceStore {
    pub fn new(query: &[u8], reference: &[u8]) -> Self {
        Self {
            query: query.to_vec(),
            reference: reference.to_vec(),
            reference_rc: reverse_complement(reference),
        }
    }

    #[inline]
    pub fn query(&self) -> &[u8] {
        &self.query
    }

    #[inline]
    pub fn reference(&self) -> &[u8] {
        &self.reference
    }

    #[inline]
    pub fn reference_rc(&self) -> &[u8] {
        &self.reference_rc
    }

    #[inline]
    pub fn query_len(&self) -> usize {
        self.query.len()
    }

    #[inline]
    pub fn reference_len(&self) -> usize {
        self.reference.len()
    }
}
