/// Greedy rectangle cover solver and overlap policy
pub mod cover;
/// Cover validation with per-cell coverage masks
pub mod verify;
