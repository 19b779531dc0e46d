use contracts::domain::product_specs::ProductRecord;
use leptos::prelude::*;

/// The fixed spec table rows, in display order. Empty values stay empty;
/// the card does no presence validation.
pub fn spec_rows(record: &ProductRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Display", record.display.clone()),
        ("Processor", record.processor.clone()),
        ("Graphics", record.graphics.clone()),
        ("Memory", record.ram.clone()),
        ("Storage", record.storage.clone()),
        ("Original OS", record.os_original.clone()),
        ("Latest OS", record.os_max.clone()),
        ("Battery", record.battery.clone()),
        ("Rear Camera", record.camera_rear.clone()),
        ("Front Camera", record.camera_front.clone()),
    ]
}

#[component]
pub fn ProductCard(record: ProductRecord) -> impl IntoView {
    let rows = spec_rows(&record);

    view! {
        <div class="product-column">
            <div class="product-card">
                <img src=record.image.clone() alt=record.model.clone() class="product-image" />
                <h2 class="product-name">{record.model.clone()}</h2>
                <p class="product-release">{record.release_date.clone()}</p>
                <table class="specs-table">
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <tr>
                                        <td>{label}</td>
                                        <td>{value}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_rows_fixed_order() {
        let record = ProductRecord {
            display: "6.1\" OLED".to_string(),
            ram: "8 GB".to_string(),
            ..ProductRecord::default()
        };
        let rows = spec_rows(&record);

        let labels: Vec<&str> = rows.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "Display",
                "Processor",
                "Graphics",
                "Memory",
                "Storage",
                "Original OS",
                "Latest OS",
                "Battery",
                "Rear Camera",
                "Front Camera",
            ]
        );

        assert_eq!(rows[0].1, "6.1\" OLED");
        assert_eq!(rows[3].1, "8 GB");
        // Absent content passes through as an empty cell.
        assert_eq!(rows[1].1, "");
    }
}
