use quire::Record;
use serde_json::json;

/// `n` purchase records alternating between paid and void, spread over two tenants.
pub fn purchases(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            json!({
                "id": i + 1,
                "customer": format!("Customer {}", i + 1),
                "status": if i % 2 == 0 { "paid" } else { "void" },
                "tenant_id": i % 2 + 1,
                "amount": (i + 1) * 10,
            })
        })
        .collect()
}

/// A handlebars view listing purchases with their filters and summary.
pub const PURCHASES_VIEW: &str = "\
{{title}}
Filters: {{#each filters}}{{@key}}={{this}} {{/each}}
{{#each data}}#{{this.id}} {{this.customer}} {{this.status}} {{this.amount}}
{{/each}}
Total: {{totals.count}}
";

/// A view that prints a single invoice record.
pub const INVOICE_VIEW: &str = "\
Invoice {{data.number}}
Customer: {{data.customer}}
";
