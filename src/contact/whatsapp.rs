//! WhatsApp `wa.me` deep links.

use crate::domain::Product;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const WA_BASE: &str = "https://wa.me";

/// Builds the inquiry message for `product`.
///
/// `site_base` is the public storefront origin; the message ends with a link
/// that reopens the product's detail overlay.
#[must_use]
pub fn inquiry_message(product: &Product, site_base: &str) -> String {
    format!(
        "Hi, I'm interested in this Jewellery product:\n\
         Product ID: {code}\n\
         Type: {kind}\n\
         Purity: {purity}\n\
         Price: {price}\n\
         Please provide more information.\n\
         {site}/catalog?product={index}",
        code = product.code(),
        kind = product.ornament.name,
        purity = product.purity_karats(),
        price = product.selling_price,
        site = site_base.trim_end_matches('/'),
        index = product.index,
    )
}

/// Deep link that opens a WhatsApp chat pre-filled with a product inquiry.
///
/// # Examples
///
/// ```
/// use dimoss_catalog::contact::inquiry_link;
/// use dimoss_catalog::domain::Product;
///
/// let link = inquiry_link("917404413382", &Product::sample(1), "https://dimoss.in");
/// assert!(link.starts_with("https://wa.me/917404413382?text=Hi%2C%20I'm%20interested"));
/// assert!(link.ends_with("catalog%3Fproduct%3D1"));
/// ```
#[must_use]
pub fn inquiry_link(number: &str, product: &Product, site_base: &str) -> String {
    let message = inquiry_message(product, site_base);
    format!(
        "{WA_BASE}/{number}?text={}",
        utf8_percent_encode(&message, URI_COMPONENT)
    )
}

/// Deep link for the floating chat bubble, pre-filled with a greeting.
#[must_use]
pub fn greeting_link(number: &str) -> String {
    format!("{WA_BASE}/{number}?text=Hi")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Label;

    fn product() -> Product {
        let mut product = Product::sample(1);
        product.prefix = Label::new("P");
        product.ornament = Label::new("LR");
        product.purity = Label::new("22");
        product.selling_price = 1234.0;
        product
    }

    #[test]
    fn message_follows_template() {
        assert_eq!(
            inquiry_message(&product(), "https://dimoss.in/"),
            "Hi, I'm interested in this Jewellery product:\n\
             Product ID: P-1\n\
             Type: LR\n\
             Purity: 22K\n\
             Price: 1234\n\
             Please provide more information.\n\
             https://dimoss.in/catalog?product=1"
        );
    }

    #[test]
    fn link_percent_encodes_like_encode_uri_component() {
        let link = inquiry_link("917404413382", &product(), "https://dimoss.in");

        assert_eq!(
            link,
            "https://wa.me/917404413382?text=Hi%2C%20I'm%20interested%20in%20this%20Jewellery%20product%3A%0A\
             Product%20ID%3A%20P-1%0AType%3A%20LR%0APurity%3A%2022K%0APrice%3A%201234%0A\
             Please%20provide%20more%20information.%0A\
             https%3A%2F%2Fdimoss.in%2Fcatalog%3Fproduct%3D1"
        );
    }

    #[test]
    fn fractional_price_is_printed_as_is() {
        let mut product = product();
        product.selling_price = 999.5;
        assert!(inquiry_message(&product, "https://dimoss.in").contains("Price: 999.5\n"));
    }

    #[test]
    fn greeting() {
        assert_eq!(greeting_link("917404413382"), "https://wa.me/917404413382?text=Hi");
    }
}
