// Two-tier handler layout mirroring the route table:
// public (no credential) -> protected (authenticated + permission-guarded).

pub mod protected;
pub mod public;
