//! Static page copy: brand, navigation, and the about overlay text.

pub const BRAND: &str = "ROW X402";
pub const LOGO_SRC: &str = "/logo_tr.png";
pub const COPYRIGHT: &str = "© 2025 ROW X402. All rights reserved.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// External links; the ABOUT entry is rendered separately since it toggles
/// the overlay instead of leaving the page.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "X",
        href: "https://x.com/rowx402",
    },
    NavLink {
        label: "DOCS",
        href: "https://docs.rowx402.com",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutBlock {
    Title(&'static str),
    Text(&'static str),
    Subtitle(&'static str),
    SectionTitle(&'static str),
    Feature {
        title: &'static str,
        text: &'static str,
    },
    CallToAction(&'static str),
}

impl AboutBlock {
    /// CSS class of the block's outer element.
    pub fn class(&self) -> &'static str {
        match self {
            AboutBlock::Title(_) => "about-title",
            AboutBlock::Text(_) => "about-text",
            AboutBlock::Subtitle(_) => "about-subtitle",
            AboutBlock::SectionTitle(_) => "about-section-title",
            AboutBlock::Feature { .. } => "about-feature",
            AboutBlock::CallToAction(_) => "about-cta",
        }
    }
}

/// Elements that fade in as they scroll into view.
pub const REVEAL_SELECTOR: &str =
    ".about-text, .about-feature, .about-subtitle, .about-section-title, .about-cta, .about-title";

pub const ABOUT: &[AboutBlock] = &[
    AboutBlock::Title("The Bottleneck of Autonomy"),
    AboutBlock::Text(
        "The promise of the Agent Economy—where AI software operates and transacts autonomously—is currently stifled by legacy financial infrastructure. AI agents cannot use credit cards; they cannot wait days for settlement. They require instant, automated, machine-readable payments.",
    ),
    AboutBlock::Text(
        "The X402 protocol provides the necessary universal language for machine-to-machine payments over HTTP. However, implementing X402 at an enterprise scale—managing hundreds of distinct wallets, balancing gas fees, and enforcing compliance rules—creates a new, complex bottleneck.",
    ),
    AboutBlock::Text(
        "ROW X402 is the abstraction layer that makes the X402 standard practical. We transform the complexity of on-chain account management into a seamless, single API call, allowing any business to launch a fully financially autonomous AI fleet instantly.",
    ),
    AboutBlock::Subtitle("From Code to Capital in Seconds"),
    AboutBlock::Text(
        "ROW X402 is engineered to be the first and last step in preparing your AI agents for the decentralized economy. We deliver a comprehensive, zero-friction solution for rapid scaling.",
    ),
    AboutBlock::SectionTitle("What We Solve:"),
    AboutBlock::Feature {
        title: "Zero-Friction Onboarding",
        text: "We eliminate the need for manual seed phrase management, complex signing, and manual gas token acquisition. Agents are provisioned with smart, self-funded wallets in seconds.",
    },
    AboutBlock::Feature {
        title: "Unbroken Compliance",
        text: "Our rule-based smart wallets guarantee security. Funds are spent only on whitelisted X402 endpoints and never exceed pre-set spending limits, giving enterprises secure control over their autonomous budgets.",
    },
    AboutBlock::Feature {
        title: "Seamless Gas Abstraction",
        text: "Your agents only pay in the settlement currency (e.g., USDC). Our proprietary Row Network handles all native network gas fees, dramatically simplifying financial logic and maintenance.",
    },
    AboutBlock::Subtitle("Architecting the Autonomous Future"),
    AboutBlock::Text(
        "Our vision extends beyond mere payment processing. We aim to be the foundational operating system for every autonomous piece of software that requires financial agency.",
    ),
    AboutBlock::SectionTitle("We are actively working on:"),
    AboutBlock::Feature {
        title: "Multi-Chain X402",
        text: "Expanding our row network to universally support all X402 standards across major L1s and L2s.",
    },
    AboutBlock::Feature {
        title: "ZK-Audit Layer",
        text: "Integrating Zero-Knowledge proofs to allow enterprises to audit compliance and spending rules without revealing sensitive internal usage logs to third parties.",
    },
    AboutBlock::CallToAction(
        "Join the Infrastructure Revolution: If you are building an AI service that needs machine payments, or deploying an agent fleet that needs autonomy, ROW X402 is your indispensable partner. We build the ramps; you deploy the future.",
    ),
];
