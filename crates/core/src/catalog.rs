use crate::models::{Product, Theme};

static CATALOG: [Product; 8] = [
    Product {
        key: "lims",
        name: "Imara LIMS",
        theme: Theme::Red,
        features: &[
            "Sample Management",
            "Workflow Automation",
            "Inventory Management",
            "Compliance & Security",
            "Reporting & Analytics",
            "Customer Portal",
            "Integration Capabilities",
            "Billing & Invoicing",
        ],
    },
    Product {
        key: "school",
        name: "Imara School",
        theme: Theme::Blue,
        features: &[
            "Student Info System",
            "Academic Management",
            "Fee Management",
            "Timetable Management",
            "Library Management",
            "Hostel & Transport",
            "HR & Payroll",
            "Communication",
        ],
    },
    Product {
        key: "hms",
        name: "Hospital Management",
        theme: Theme::Emerald,
        features: &[
            "Patient Registration",
            "Doctor Scheduling",
            "Inpatient/Outpatient",
            "Pharmacy & Inventory",
            "Lab & Radiology",
            "Billing & Insurance",
            "Ward Management",
            "Medical Records (EMR)",
        ],
    },
    Product {
        key: "property",
        name: "Property Management",
        theme: Theme::Amber,
        features: &[
            "Tenant & Leases",
            "Rent & Utility Billing",
            "Maintenance Tracking",
            "Financial Reporting",
            "Vendor Management",
            "Document Management",
            "Automated Alerts",
            "Vacancy Tracking",
        ],
    },
    Product {
        key: "inventory",
        name: "Inventory System",
        theme: Theme::Purple,
        features: &[
            "Stock Tracking",
            "Purchase Orders",
            "Supplier Management",
            "Warehouse Mgmt",
            "Sales Fulfillment",
            "Barcode/QR Scanning",
            "Low Stock Alerts",
            "Valuation Reports",
        ],
    },
    Product {
        key: "accounting",
        name: "Accounting",
        theme: Theme::Indigo,
        features: &[
            "General Ledger",
            "AP & AR",
            "Bank Reconciliation",
            "Financial Reporting",
            "Tax Compliance",
            "Budgeting",
            "Multi-Currency",
            "Payroll Integration",
        ],
    },
    Product {
        key: "kmacho",
        name: "Kmacho Data",
        theme: Theme::Pink,
        features: &[
            "Mobile Data Collection",
            "Offline Entry",
            "GPS Tracking",
            "Real-Time Sync",
            "Custom Forms",
            "Photo Capture",
            "Survey Logic",
            "Analytics",
        ],
    },
    Product {
        key: "logistics",
        name: "Imara Logistics",
        theme: Theme::Cyan,
        features: &[
            "Fleet Management",
            "Route Optimization",
            "Driver Tracking",
            "Delivery Management",
            "Fuel Management",
            "Maintenance Scheduling",
            "Proof of Delivery",
            "Cost Tracking",
        ],
    },
];

pub const DEFAULT_PRODUCT_KEY: &str = "lims";

pub fn catalog() -> &'static [Product] {
    &CATALOG
}

pub fn product(key: &str) -> Option<&'static Product> {
    let key = key.trim().to_lowercase();
    CATALOG.iter().find(|product| product.key == key)
}

/// Unknown keys resolve to the LIMS hub.
pub fn product_or_default(key: &str) -> &'static Product {
    product(key).unwrap_or(&CATALOG[0])
}
