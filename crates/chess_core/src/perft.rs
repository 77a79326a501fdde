use crate::Rules;

/// Counts leaf nodes of the legal-move tree down to `depth`, walking it
/// with apply/unapply. The rules engine is validated against published
/// counts with this.
pub fn perft<R: Rules + ?Sized>(rules: &mut R, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = rules.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        rules.apply(mv);
        nodes += perft(rules, depth - 1);
        rules.unapply();
    }
    nodes
}
