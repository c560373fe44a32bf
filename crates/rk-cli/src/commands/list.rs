use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(catalog: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Theme", "Words", "Options"]);

    for set in catalog.iter() {
        table.add_row(vec![
            set.id.to_string(),
            set.theme.clone(),
            set.words.join(", "),
            set.options.len().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} riddle sets", catalog.len());

    Ok(())
}
