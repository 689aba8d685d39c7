use crate::shared::Result;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Maximum length for component ids (security limit)
const MAX_ID_LENGTH: usize = 64;

/// Maximum length for display strings (security limit)
const MAX_TEXT_LENGTH: usize = 255;

/// Largest accepted catalog price in IDR. Eight of these still fit in a u64.
pub const MAX_PRICE: u64 = 1_000_000_000_000_000;

/// NewType wrapper for a component id, unique within its category
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(id: String) -> Result<Self> {
        if id.trim().is_empty() {
            anyhow::bail!("Component id cannot be empty");
        }

        if id.len() > MAX_ID_LENGTH {
            anyhow::bail!(
                "Component id is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_ID_LENGTH
            );
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Price in IDR. IDR has no subunit here, so the amount is whole rupiah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> u64 {
        self.0
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Component value object: one immutable catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    id: ComponentId,
    name: String,
    brand: String,
    price: Price,
    specs: Option<String>,
    image: Option<String>,
}

impl Component {
    pub fn new(id: String, name: String, brand: String, price: u64) -> Result<Self> {
        let id = ComponentId::new(id)?;
        validate_text("name", &name)?;
        validate_text("brand", &brand)?;

        if price > MAX_PRICE {
            anyhow::bail!(
                "Component '{}' has price {} above the maximum of {}",
                id,
                price,
                MAX_PRICE
            );
        }

        Ok(Self {
            id,
            name,
            brand,
            price: Price::new(price),
            specs: None,
            image: None,
        })
    }

    pub fn with_specs(mut self, specs: String) -> Self {
        self.specs = Some(specs);
        self
    }

    pub fn with_image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn specs(&self) -> Option<&str> {
        self.specs.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// "Brand Name", as shown in pickers and summaries
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }
}

fn validate_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("Component {} cannot be empty", field);
    }

    if value.len() > MAX_TEXT_LENGTH {
        anyhow::bail!(
            "Component {} is too long ({} bytes). Maximum allowed: {} bytes",
            field,
            value.len(),
            MAX_TEXT_LENGTH
        );
    }

    Ok(())
}
