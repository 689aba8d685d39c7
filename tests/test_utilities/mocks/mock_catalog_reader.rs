use pc_build_sim::prelude::*;

/// Mock CatalogReader serving an in-memory catalog
pub struct MockCatalogReader {
    pub categories: Vec<Category>,
    pub should_fail: bool,
}

impl MockCatalogReader {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            should_fail: false,
        }
    }

    /// Two CPUs and one GPU, enough for most scenarios
    pub fn sample() -> Self {
        Self::new(vec![
            Category::new(
                "Processor".to_string(),
                Slot::Cpu,
                vec![
                    component("c1", "Ryzen 5 7600", "AMD", 3_200_000, Some("6 Cores, 12 Threads")),
                    component("c2", "Core i5-13400F", "Intel", 2_900_000, Some("10 Cores, LGA1700")),
                ],
            )
            .unwrap(),
            Category::new(
                "Graphics Card".to_string(),
                Slot::Gpu,
                vec![component("g1", "GeForce RTX 4060", "MSI", 5_000_000, Some("8GB GDDR6"))],
            )
            .unwrap(),
        ])
    }

    pub fn with_failure() -> Self {
        Self {
            categories: Vec::new(),
            should_fail: true,
        }
    }
}

impl CatalogReader for MockCatalogReader {
    fn read_catalog(&self) -> Result<Catalog> {
        if self.should_fail {
            anyhow::bail!("Mock catalog read failure");
        }
        Catalog::new(self.categories.clone())
    }

    fn source_description(&self) -> String {
        "mock catalog".to_string()
    }
}

pub fn component(id: &str, name: &str, brand: &str, price: u64, specs: Option<&str>) -> Component {
    let component = Component::new(id.to_string(), name.to_string(), brand.to_string(), price)
        .unwrap();
    match specs {
        Some(specs) => component.with_specs(specs.to_string()),
        None => component,
    }
}
