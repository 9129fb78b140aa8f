//! Workspace-wide index conventions.
//!
//! A node assignment is identified with an unsigned state index:
//!
//! - **Bit order**: node `i`'s bit is `(index >> i) & 1` (little-endian).
//! - **Rendering**: bitstrings put node 0 in the **leftmost** character,
//!   so index 6 on four nodes renders as `"0110"`.
//! - **Spin view**: bit 0 → spin `+1`, bit 1 → spin `−1`.
//!
//! These three rules are part of the observable contract: the brute-force
//! solver, the Ising mapping, and the simulator's output distribution all
//! agree on them. Nothing outside this module derives a mask or a sign.

/// The bit assigned to `node` under state index `index`.
#[inline]
pub fn bit_of(index: usize, node: usize) -> u8 {
    ((index >> node) & 1) as u8
}

/// The ±1 spin corresponding to a single bit: 0 → +1, 1 → −1.
#[inline]
pub fn spin_of(bit: u8) -> i8 {
    if bit == 0 { 1 } else { -1 }
}

/// Expand a state index into its bit assignment over `n` nodes.
pub fn bits_of(index: usize, n: usize) -> Vec<u8> {
    (0..n).map(|node| bit_of(index, node)).collect()
}

/// Expand a state index into its spin assignment over `n` nodes.
pub fn spins_of(index: usize, n: usize) -> Vec<i8> {
    (0..n).map(|node| spin_of(bit_of(index, node))).collect()
}

/// Render a state index as a fixed-width bitstring, node 0 leftmost.
pub fn bitstring_of(index: usize, n: usize) -> String {
    (0..n)
        .map(|node| if bit_of(index, node) == 0 { '0' } else { '1' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_order_is_little_endian() {
        // index 6 = 0b0110: node 1 and node 2 are set.
        assert_eq!(bits_of(6, 4), vec![0, 1, 1, 0]);
    }

    #[test]
    fn bitstring_puts_node_zero_leftmost() {
        assert_eq!(bitstring_of(6, 4), "0110");
        assert_eq!(bitstring_of(9, 4), "1001");
        assert_eq!(bitstring_of(1, 4), "1000");
    }

    #[test]
    fn spin_mapping() {
        assert_eq!(spin_of(0), 1);
        assert_eq!(spin_of(1), -1);
        assert_eq!(spins_of(6, 4), vec![1, -1, -1, 1]);
    }

    #[test]
    fn zero_nodes_is_empty() {
        assert_eq!(bits_of(0, 0), Vec::<u8>::new());
        assert_eq!(bitstring_of(0, 0), "");
    }
}
