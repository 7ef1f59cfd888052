// Library root: possession-efficiency classification and archetype ranking
// for basketball matchups. Everything here is a pure transform over
// already-computed numbers; the only I/O is config loading.

pub mod archetype;
pub mod config;
pub mod format;
pub mod matchup;
pub mod possession;
