use serde::{Deserialize, Serialize};

use super::countries;
use super::error::QrBillError;

pub const MAX_NAME_CHARS: usize = 70;
pub const MAX_STREET_CHARS: usize = 70;
pub const MAX_HOUSE_NUM_CHARS: usize = 16;
pub const MAX_POSTAL_CODE_CHARS: usize = 16;
pub const MAX_CITY_CHARS: usize = 35;
pub const MAX_LINE_CHARS: usize = 70;

/// Postal address of a creditor or debtor.
///
/// The QR-bill standard allows exactly two shapes, marked `S` and `K` in the
/// payload. Build one with [`AddressBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Address {
    /// `S`: street, house number, postal code and city in separate fields.
    Structured(StructuredAddress),
    /// `K`: two free-form lines.
    Combined(CombinedAddress),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredAddress {
    pub name: String,
    pub street: Option<String>,
    pub house_num: Option<String>,
    pub postal_code: String,
    pub city: String,
    /// ISO 3166-1 alpha-2.
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedAddress {
    pub name: String,
    /// Street and house number or P.O. box.
    pub line1: Option<String>,
    /// Postal code and town.
    pub line2: String,
    /// ISO 3166-1 alpha-2.
    pub country: String,
}

impl Address {
    /// Payload marker: `S` for structured, `K` for combined.
    pub fn address_type(&self) -> &'static str {
        match self {
            Self::Structured(_) => "S",
            Self::Combined(_) => "K",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Structured(a) => &a.name,
            Self::Combined(a) => &a.name,
        }
    }

    pub fn country(&self) -> &str {
        match self {
            Self::Structured(a) => &a.country,
            Self::Combined(a) => &a.country,
        }
    }

    /// The seven payload fields in their fixed order: address type, name,
    /// street or line 1, house number or line 2, postal code, town, country.
    pub fn to_fields(&self) -> [String; 7] {
        match self {
            Self::Structured(a) => [
                "S".to_string(),
                a.name.clone(),
                a.street.clone().unwrap_or_default(),
                a.house_num.clone().unwrap_or_default(),
                a.postal_code.clone(),
                a.city.clone(),
                a.country.clone(),
            ],
            Self::Combined(a) => [
                "K".to_string(),
                a.name.clone(),
                a.line1.clone().unwrap_or_default(),
                a.line2.clone(),
                String::new(),
                String::new(),
                a.country.clone(),
            ],
        }
    }

    /// Display lines for the slip, each wrapped to `max_line_chars`.
    ///
    /// Lines only break at spaces. A single word longer than the limit is
    /// kept whole on its own line.
    pub fn as_paragraph(&self, max_line_chars: usize) -> Vec<String> {
        let mut lines = vec![self.name().to_string()];
        match self {
            Self::Structured(a) => {
                let street = format!(
                    "{} {}",
                    a.street.as_deref().unwrap_or_default(),
                    a.house_num.as_deref().unwrap_or_default()
                );
                let street = street.trim();
                if !street.is_empty() {
                    lines.push(street.to_string());
                }
                lines.push(format!("{}-{} {}", a.country, a.postal_code, a.city));
            }
            Self::Combined(a) => {
                if let Some(line1) = &a.line1 {
                    lines.push(line1.clone());
                }
                lines.push(a.line2.clone());
            }
        }

        lines
            .iter()
            .flat_map(|line| wrap_line(line, max_line_chars))
            .collect()
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_paragraph(usize::MAX).join(", "))
    }
}

/// Greedy word wrap on space boundaries.
fn wrap_line(line: &str, max_chars: usize) -> Vec<String> {
    if line.chars().count() <= max_chars {
        return vec![line.to_string()];
    }

    let mut wrapped = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for word in line.split(' ').filter(|w| !w.is_empty()) {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > max_chars {
            wrapped.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        wrapped.push(current);
    }
    wrapped
}

/// Builder for [`Address`].
///
/// The shape follows from the fields supplied: `line1`/`line2` select the
/// combined form, anything else the structured form. Mixing both is an
/// error.
///
/// ```
/// use qrbill::core::*;
///
/// let address = AddressBuilder::new("Pia-Maria Rutschmann-Schnyder")
///     .street("Grosse Marktgasse")
///     .house_num("28")
///     .postal_code("9400")
///     .city("Rorschach")
///     .country("Schweiz")
///     .build()
///     .unwrap();
///
/// assert_eq!(address.address_type(), "S");
/// assert_eq!(address.country(), "CH");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressBuilder {
    name: String,
    street: Option<String>,
    house_num: Option<String>,
    postal_code: Option<String>,
    city: Option<String>,
    line1: Option<String>,
    line2: Option<String>,
    country: Option<String>,
}

impl AddressBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn house_num(mut self, house_num: impl Into<String>) -> Self {
        self.house_num = Some(house_num.into());
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn line1(mut self, line: impl Into<String>) -> Self {
        self.line1 = Some(line.into());
        self
    }

    pub fn line2(mut self, line: impl Into<String>) -> Self {
        self.line2 = Some(line.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Validate lengths, resolve the country and pick the address shape.
    pub fn build(self) -> Result<Address, QrBillError> {
        let name = check_length(Some(self.name), "name", MAX_NAME_CHARS)?
            .ok_or_else(|| QrBillError::field("name", "must not be empty"))?;

        let raw_country = self.country.unwrap_or_default();
        let country = countries::resolve_country(&raw_country).ok_or_else(|| {
            QrBillError::field(
                "country",
                format!("the country code '{}' is not valid", raw_country.trim()),
            )
        })?;

        let street = non_blank(self.street);
        let house_num = non_blank(self.house_num);
        let postal_code = non_blank(self.postal_code);
        let city = non_blank(self.city);
        let line1 = non_blank(self.line1);
        let line2 = non_blank(self.line2);

        let structured =
            street.is_some() || house_num.is_some() || postal_code.is_some() || city.is_some();
        let combined = line1.is_some() || line2.is_some();

        if structured && combined {
            return Err(QrBillError::field(
                "address",
                "line1/line2 cannot be combined with street, house_num, postal_code or city",
            ));
        }

        if combined {
            let line1 = check_length(line1, "line1", MAX_LINE_CHARS)?;
            let line2 = check_length(line2, "line2", MAX_LINE_CHARS)?.ok_or_else(|| {
                QrBillError::field("line2", "is mandatory for a combined address")
            })?;
            return Ok(Address::Combined(CombinedAddress {
                name,
                line1,
                line2,
                country: country.to_string(),
            }));
        }

        let street = check_length(street, "street", MAX_STREET_CHARS)?;
        let house_num = check_length(house_num, "house_num", MAX_HOUSE_NUM_CHARS)?;
        let postal_code = check_length(postal_code, "postal_code", MAX_POSTAL_CODE_CHARS)?
            .ok_or_else(|| QrBillError::field("postal_code", "is mandatory"))?;
        let city = check_length(city, "city", MAX_CITY_CHARS)?
            .ok_or_else(|| QrBillError::field("city", "is mandatory"))?;

        Ok(Address::Structured(StructuredAddress {
            name,
            street,
            house_num,
            postal_code,
            city,
            country: country.to_string(),
        }))
    }
}

/// Replace line breaks with a space, trim, and drop blank values.
///
/// Payload fields are CRLF-separated, so no field may carry a line break.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.replace("\r\n", " ").replace(['\r', '\n'], " "))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trim, drop blank values, and enforce a maximum length in characters.
fn check_length(
    value: Option<String>,
    field: &str,
    max_chars: usize,
) -> Result<Option<String>, QrBillError> {
    let Some(value) = non_blank(value) else {
        return Ok(None);
    };
    if value.chars().count() > max_chars {
        return Err(QrBillError::field(
            field,
            format!("cannot have more than {max_chars} characters"),
        ));
    }
    Ok(Some(value))
}
