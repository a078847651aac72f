use crate::models::{Rule, RuleMatch, Topic};

pub const WELCOME_MESSAGE: &str = "Hello! Welcome to Nuvemite. Book a demo today to see how we can transform your business. How can I assist you?";

pub const SUGGESTED_PROMPTS: [&str; 4] = ["Who is the CEO?", "Imara LIMS", "Our Services", "Contact Us"];

pub const FALLBACK_RESPONSE: &str = "I'm a local AI trained on Nuvemite's content. I can tell you about our Team (CEO, CTO...), Products (LIMS, School...), or Services. Try asking 'Who is the CEO?' or 'Tell me about LIMS'.";

// First match wins. Reordering rows changes answers for overlapping inputs.
static RULES: [Rule; 27] = [
    Rule {
        topic: Topic::Leadership,
        keywords: &["ceo", "colman", "founder"],
        response: "Our CEO & Founder is Colman Mwakio. He leads our vision to innovate for humanity.",
    },
    Rule {
        topic: Topic::Leadership,
        keywords: &["cto", "david", "kimari"],
        response: "Our CTO is David Kimari. He ensures our technology stack is world-class and secure.",
    },
    Rule {
        topic: Topic::Leadership,
        keywords: &["cfo", "mary", "namunyak"],
        response: "Mary Namunyak is our CFO, managing financial strategy and sustainability.",
    },
    Rule {
        topic: Topic::Leadership,
        keywords: &["daniel", "nyagah", "developer"],
        response: "Daniel Nyagah is our Senior Developer, architecting robust software solutions.",
    },
    Rule {
        topic: Topic::Leadership,
        keywords: &["team", "leader"],
        response: "We are led by a dynamic quartet: Colman Mwakio (CEO), David Kimari (CTO), Mary Namunyak (CFO), and Daniel Nyagah (Senior Dev).",
    },
    Rule {
        topic: Topic::Product,
        keywords: &["lims"],
        response: "Imara LIMS is our Laboratory Information Management System. It features sample management, workflow automation, and compliance tracking.",
    },
    Rule {
        topic: Topic::Product,
        keywords: &["school", "education"],
        response: "Imara School is our comprehensive management system for academic institutions, covering student info, fees, library, and more.",
    },
    Rule {
        topic: Topic::Product,
        keywords: &["hms", "hospital"],
        response: "Our Hospital Management System (HMS) handles patient registration, doctor scheduling, pharmacy, and billing integration.",
    },
    Rule {
        topic: Topic::Product,
        keywords: &["property", "hseni"],
        response: "Our Property Management system simplifies tenant leases, rent billing, and maintenance tracking.",
    },
    Rule {
        topic: Topic::Product,
        keywords: &["kmacho", "survey", "data"],
        response: "Kmacho Data is our mobile data collection platform with offline entry, GPS tracking, and analytics.",
    },
    Rule {
        topic: Topic::Product,
        keywords: &["ecosystem", "product"],
        response: "Our EcosystemHub features specialized modules: Imara LIMS, Imara School, HMS, Property Management, Inventory System, Accounting, Kmacho Data, and Logistics.",
    },
    Rule {
        topic: Topic::Service,
        keywords: &["software", "development"],
        response: "We build robust, scalable custom software applications tailored to your specific business challenges.",
    },
    Rule {
        topic: Topic::Service,
        keywords: &["integration", "api"],
        response: "We specialize in System Integration, connecting your disparate tools into a unified, efficient ecosystem.",
    },
    Rule {
        topic: Topic::Service,
        keywords: &["marketing", "seo"],
        response: "Our Digital Marketing services use data-driven strategies to increase your online visibility and engagement.",
    },
    Rule {
        topic: Topic::Service,
        keywords: &["branding", "print"],
        response: "We offer high-quality bulk printing and strategic brand identity design services.",
    },
    Rule {
        topic: Topic::Service,
        keywords: &["service", "offer"],
        response: "We offer: Software Development, System Integration, Digital Transformation, E-commerce, Printing & Branding, Bulk SMS, Digital Marketing, and ICT Consulting.",
    },
    Rule {
        topic: Topic::Company,
        keywords: &["mission", "purpose"],
        response: "Our mission is to provide timely, innovative, and sustainable IT solutions among global citizens.",
    },
    Rule {
        topic: Topic::Company,
        keywords: &["vision"],
        response: "We aim to be a global leader in information technology delivering practical and viable innovations.",
    },
    Rule {
        topic: Topic::Company,
        keywords: &["value", "dna"],
        response: "Our core values (DNA) are Quality, Customer Satisfaction, Dependability, Trustworthiness, Integrity, Innovation, Practical Solutions, and Participation.",
    },
    Rule {
        topic: Topic::Contact,
        keywords: &["contact", "email", "phone", "reach"],
        response: "You can email us at info@nuvemite.com or visit our Contact page. We are based in Nairobi, Kenya.",
    },
    Rule {
        topic: Topic::SmallTalk,
        keywords: &["hello", "hi", "hey"],
        response: "Hello there! Ask me about our CEO, our products like Imara LIMS, or our services.",
    },
    Rule {
        topic: Topic::SmallTalk,
        keywords: &["thank"],
        response: "You're very welcome! Let me know if you need anything else.",
    },
    // Rows below extend the site's table. They sit last so no earlier answer
    // changes; each only fires when nothing above matched.
    Rule {
        topic: Topic::Product,
        keywords: &["inventory", "stock", "warehouse"],
        response: "Our Inventory System covers stock tracking, purchase orders, supplier and warehouse management, and low stock alerts.",
    },
    Rule {
        topic: Topic::Product,
        keywords: &["accounting", "ledger", "bookkeeping"],
        response: "Our Accounting module handles the general ledger, AP & AR, bank reconciliation, tax compliance, and financial reporting.",
    },
    Rule {
        topic: Topic::Product,
        keywords: &["logistics", "fleet", "delivery"],
        response: "Imara Logistics manages your fleet with route optimization, driver tracking, proof of delivery, and cost tracking.",
    },
    Rule {
        topic: Topic::Service,
        keywords: &["sms", "bulk message"],
        response: "Our Bulk SMS Services provide reliable messaging platforms for mass communication and marketing.",
    },
    // Bare "ict" would fire inside "predict" or "strict".
    Rule {
        topic: Topic::Service,
        keywords: &["consult", "ict service", "ict support", "ict solution"],
        response: "Our ICT Consulting gives expert advice to align your technology infrastructure with business goals.",
    },
];

pub fn rules() -> &'static [Rule] {
    &RULES
}

pub fn normalize_input(input: &str) -> String {
    input.to_lowercase()
}

pub fn match_rule(text: &str) -> RuleMatch {
    let lower = normalize_input(text);

    RULES
        .iter()
        .find(|rule| contains_any(&lower, rule.keywords))
        .map(|rule| RuleMatch {
            topic: rule.topic,
            response: rule.response,
        })
        .unwrap_or(RuleMatch {
            topic: Topic::Fallback,
            response: FALLBACK_RESPONSE,
        })
}

pub fn respond(text: &str) -> String {
    match_rule(text).response.to_string()
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
