//! Common test utilities for building workflow texts and diagram payloads.
use alir::prelude::*;

/// The canonical three-step shop workflow: start, customer, end.
#[allow(dead_code)]
pub fn shop_workflow_text() -> &'static str {
    "1. Buka toko\n2. Layani pelanggan\n3. Tutup toko"
}

/// A messier text with bullets, blank lines, and marker-only lines.
#[allow(dead_code)]
pub fn messy_workflow_text() -> &'static str {
    "1. Mulai shift pagi\n\n- Siapkan peralatan\n*Cek stok gudang\n- \n2) Layani pembeli\n   \n3. Catat laporan penjualan\nTutup toko"
}

/// A client-computed diagram payload in the wire shape.
#[allow(dead_code)]
pub fn client_payload() -> serde_json::Value {
    serde_json::json!({
        "steps": [
            {"id": "step_1", "number": 1, "description": "Buka toko", "type": "start"},
            {"id": "step_2", "number": 2, "description": "Tutup toko", "type": "end"}
        ],
        "nodes": [
            {"id": "step_1", "label": "Buka toko", "type": "start", "shape": "circle"},
            {"id": "step_2", "label": "Tutup toko", "type": "end", "shape": "circle"}
        ],
        "edges": [
            {"from": "step_1", "to": "step_2", "label": "Lanjut"}
        ],
        "generated_at": "2024-01-01T00:00:00.000Z"
    })
}

/// Generates a diagram from the canonical shop workflow.
#[allow(dead_code)]
pub fn shop_diagram() -> Diagram {
    Generator::new()
        .generate_from_text(shop_workflow_text())
        .expect("shop workflow text is non-empty")
}
