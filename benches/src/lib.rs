//! бенчмарки нормализации: `cargo bench -p unicode_normalizing_benches`
