//! Application constants for the CSV header analyzer
//!
//! Holds the canonical keyword dictionary, default output locations and
//! the fixed layout values used by the console and file reports.

// =============================================================================
// Keyword Dictionary
// =============================================================================

/// Canonical keyword-to-description table.
///
/// Declaration order is significant: substring matching walks this table
/// top to bottom and the first containing keyword wins, so specific keys
/// (`order_id`) must stay ahead of generic ones (`order`, `id`).
pub const DEFAULT_PATTERNS: &[(&str, &str)] = &[
    // ID patterns
    ("invoice_id", "unique transaction identifier"),
    ("order_id", "unique order identifier"),
    ("customer_id", "unique customer identifier"),
    ("product_id", "unique product identifier"),
    ("user_id", "unique user identifier"),
    ("id", "unique identifier"),
    // Name patterns
    (
        "vendor_name",
        "the supplier or vendor associated with the transaction",
    ),
    ("customer_name", "the customer associated with the transaction"),
    ("product_name", "the name of the product"),
    ("company_name", "the name of the company"),
    ("name", "name or title information"),
    // Financial patterns
    ("amount", "monetary value of the transaction"),
    ("price", "price or cost of the item"),
    ("total", "total amount"),
    ("subtotal", "subtotal amount before taxes"),
    ("tax", "tax amount"),
    ("discount", "discount amount"),
    ("cost", "cost of the item or service"),
    ("fee", "fee amount"),
    ("charge", "charge amount"),
    // Date patterns
    ("payment_date", "date on which the payment was made"),
    ("order_date", "date when the order was placed"),
    ("invoice_date", "date when the invoice was created"),
    ("due_date", "date when payment is due"),
    ("created_date", "date when the record was created"),
    ("updated_date", "date when the record was last updated"),
    ("date", "date information"),
    // Contact patterns
    ("email", "email address"),
    ("phone", "phone number"),
    ("address", "address information"),
    ("zip", "postal code"),
    ("city", "city name"),
    ("state", "state or province"),
    ("country", "country name"),
    // Status and type patterns
    ("status", "current status of the record"),
    ("type", "category or type classification"),
    ("category", "category classification"),
    ("description", "detailed description of the item"),
    // Business patterns
    ("vendor", "supplier or vendor information"),
    ("customer", "customer information"),
    ("payment", "payment-related information"),
    ("invoice", "invoice or billing information"),
    ("order", "order information"),
    ("product", "product information"),
    ("item", "item information"),
    ("service", "service information"),
    // Quantity patterns
    ("quantity", "quantity or count"),
    ("qty", "quantity or count"),
    ("count", "count or number"),
    ("number", "numeric value"),
    // Shipping patterns
    ("shipping", "shipping information"),
    ("billing", "billing information"),
    ("delivery", "delivery information"),
];

/// Keys must be longer than this (in characters) to take part in substring matching
pub const MIN_SUBSTRING_KEY_LEN: usize = 2;

/// Prefix of the description produced when no keyword matches
pub const FALLBACK_PREFIX: &str = "data field related to";

// =============================================================================
// Output Defaults
// =============================================================================

/// Report file written to the working directory unless overridden
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// Width of the `=` rules framing the console results
pub const CONSOLE_RULE_WIDTH: usize = 60;

/// Width of the `=` rule under the report file title
pub const REPORT_RULE_WIDTH: usize = 40;

/// Title printed inside the console banner
pub const CONSOLE_TITLE: &str = "CSV HEADER ANALYSIS RESULTS";

/// Title on the first line of the report file
pub const REPORT_TITLE: &str = "CSV Header Analysis Results";

/// Attribution line closing the report file
pub const REPORT_ATTRIBUTION: &str = "Generated by CSV Header Analyzer";

/// Separator between a header and its description
pub const ENTRY_SEPARATOR: &str = "→";
