//! The curated record set. Star counts are approximate snapshots, not live data.

use crate::catalog::Resource;

pub(crate) const RESOURCES: [Resource; 20] = [
    Resource {
        name: "OWASP Cheat Sheet Series",
        description: "Comprehensive practical guides for mitigating common web application vulnerabilities.",
        language: "All",
        stars: "N/A",
        link: "https://cheatsheetseries.owasp.org/",
    },
    Resource {
        name: "OWASP Top Ten",
        description: "The canonical top 10 most critical web application security risks and guidance for mitigation.",
        language: "All",
        stars: "N/A",
        link: "https://owasp.org/www-project-top-ten/",
    },
    Resource {
        name: "GitHub Code Scanning (CodeQL)",
        description: "GitHub's code scanning powered by CodeQL for finding vulnerabilities via query-based analysis.",
        language: "Multi",
        stars: "N/A",
        link: "https://securitylab.github.com/tools/codeql",
    },
    Resource {
        name: "Dependabot",
        description: "Automated dependency updates to help keep projects up-to-date and reduce supply-chain risk.",
        language: "Multi",
        stars: "N/A",
        link: "https://github.com/dependabot/dependabot-core",
    },
    Resource {
        name: "GitHub Secret Scanning",
        description: "Detects and prevents secrets from being pushed to GitHub repositories; integrates with providers.",
        language: "Multi",
        stars: "N/A",
        link: "https://docs.github.com/en/code-security/secret-scanning",
    },
    Resource {
        name: "Semgrep",
        description: "Fast, open-source static analysis for many languages with an extensible ruleset and registry.",
        language: "Multi",
        stars: "~24k",
        link: "https://github.com/returntocorp/semgrep",
    },
    Resource {
        name: "CodeQL CLI and Queries",
        description: "Library of query packs and community queries for CodeQL to detect a wide range of vulnerabilities.",
        language: "Multi",
        stars: "N/A",
        link: "https://github.com/github/codeql",
    },
    Resource {
        name: "SonarQube",
        description: "Static analysis platform with quality and security rules across many languages (SonarSource).",
        language: "Multi",
        stars: "N/A",
        link: "https://www.sonarqube.org/",
    },
    Resource {
        name: "OpenSSF Scorecard",
        description: "Automated checks that score project security hygiene and provide actionable recommendations.",
        language: "Multi",
        stars: "~2.5k",
        link: "https://github.com/ossf/scorecard",
    },
    Resource {
        name: "OpenSSF Best Practices",
        description: "Best practices and a badge program to indicate security-conscious project practices.",
        language: "Multi",
        stars: "N/A",
        link: "https://bestpractices.coreinfrastructure.org/",
    },
    Resource {
        name: "Bandit (Python)",
        description: "Security-oriented static analyzer for Python code that finds common vulnerabilities.",
        language: "Python",
        stars: "~9k",
        link: "https://github.com/PyCQA/bandit",
    },
    Resource {
        name: "gosec",
        description: "Go security analyzer that scans for common programming mistakes and vulnerabilities.",
        language: "Go",
        stars: "~9k",
        link: "https://github.com/securego/gosec",
    },
    Resource {
        name: "RustSec Advisory DB",
        description: "A central database of security advisories for Rust crates and ecosystem tooling (cargo-audit).",
        language: "Rust",
        stars: "~3k",
        link: "https://github.com/RustSec/advisory-db",
    },
    Resource {
        name: "cargo-audit",
        description: "Tool that scans Rust projects for vulnerable dependencies using the RustSec advisory database.",
        language: "Rust",
        stars: "~4k",
        link: "https://github.com/RustSec/cargo-audit",
    },
    Resource {
        name: "TensorFlow Security",
        description: "Guidance and resources related to security considerations when using TensorFlow and ML models.",
        language: "TensorFlow",
        stars: "N/A",
        link: "https://www.tensorflow.org/security",
    },
    Resource {
        name: "Snyk",
        description: "Developer-first security tooling for dependency, container, and IaC scanning with remediation advice.",
        language: "Multi",
        stars: "~11k",
        link: "https://snyk.io/",
    },
    Resource {
        name: "Trivy (Aqua Security)",
        description: "A simple and comprehensive vulnerability scanner for containers, filesystems and Git repositories.",
        language: "Multi",
        stars: "~21k",
        link: "https://github.com/aquasecurity/trivy",
    },
    Resource {
        name: "Dependabot Core (core engine)",
        description: "The core library that powers Dependabot plumbing for updating dependencies across ecosystems.",
        language: "Multi",
        stars: "~3k",
        link: "https://github.com/dependabot/dependabot-core",
    },
    Resource {
        name: "Zig (language & security guidance)",
        description: "Zig language repo and community resources; review project policies and security considerations.",
        language: "Zig",
        stars: "~16k",
        link: "https://github.com/ziglang/zig",
    },
    Resource {
        name: "Awesome Security (curated lists)",
        description: "A curated list of security-related tools, papers, and resources useful for teams and researchers.",
        language: "Multi",
        stars: "~12k",
        link: "https://github.com/sbilly/awesome-security",
    },
];
