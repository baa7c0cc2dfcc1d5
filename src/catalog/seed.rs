//! Built-in article list.

use chrono::NaiveDate;

use super::item::ContentItem;

const AUTHOR: &str = "Shreegopal Dadhich";
const CARD_IMAGE: &str = "/placeholder.svg?height=300&width=500";

const TERRAFORM_BODY: &str = r#"Infrastructure as Code (IaC) has revolutionized how we manage and provision cloud resources. Terraform, as one of the leading IaC tools, enables teams to define infrastructure in a declarative way, version it alongside application code, and automate deployments across multiple cloud providers.

## Why Terraform?

Terraform offers several advantages over other IaC solutions:

- Provider-agnostic approach supporting multiple cloud platforms
- Declarative syntax that describes the desired end state
- State management for tracking real-world resources
- Plan and apply workflow for safe infrastructure changes
- Module system for reusable infrastructure components

## Best Practices for Terraform

### 1. State Management

Always use remote state storage with locking to enable team collaboration and prevent state corruption. AWS S3 with DynamoDB, Azure Storage, or Google Cloud Storage are excellent options for remote state backends.

    terraform {
      backend "s3" {
        bucket         = "terraform-state-bucket"
        key            = "project/environment/terraform.tfstate"
        region         = "us-west-2"
        dynamodb_table = "terraform-locks"
        encrypt        = true
      }
    }

### 2. Module Organization

Structure your Terraform code into reusable modules that encapsulate specific infrastructure components. This promotes code reuse and maintainability.

### 3. Environment Separation

Use workspaces or directory structures to separate environments (dev, staging, production). This ensures that changes to one environment don't affect others.

### 4. Variable Management

Define input variables with descriptions and type constraints. Use variable files (.tfvars) for environment-specific values.

### 5. Output Documentation

Document outputs thoroughly to make your modules more usable by others.

## Advanced Terraform Patterns

### Terragrunt for DRY Configurations

Terragrunt helps keep your Terraform configurations DRY (Don't Repeat Yourself) by providing remote state management, module dependencies, and code generation capabilities.

### CI/CD Integration

Integrate Terraform into your CI/CD pipeline to automate infrastructure deployments. Use tools like GitHub Actions, GitLab CI, or Jenkins to run Terraform plans and applies.

## Conclusion

By following these best practices, you can build scalable, maintainable, and secure infrastructure with Terraform. Remember that Infrastructure as Code is not just about automation but also about applying software engineering principles to infrastructure management."#;

struct Seed {
    id: &'static str,
    title: &'static str,
    slug: &'static str,
    published: (i32, u32, u32),
    excerpt: &'static str,
    categories: &'static [&'static str],
    read_time: u32,
    featured: bool,
    content: Option<&'static str>,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        title: "Infrastructure as Code: Terraform Best Practices",
        slug: "infrastructure-as-code-terraform-best-practices",
        published: (2024, 1, 15),
        excerpt: "Master Infrastructure as Code with Terraform. Learn about state management, module design, and advanced patterns for scalable cloud infrastructure deployment.",
        categories: &["Terraform", "IaC", "AWS"],
        read_time: 12,
        featured: true,
        content: Some(TERRAFORM_BODY),
    },
    Seed {
        id: "2",
        title: "Building Robust CI/CD Pipelines with GitLab",
        slug: "building-robust-cicd-pipelines-gitlab",
        published: (2024, 1, 10),
        excerpt: "Design and implement enterprise-grade CI/CD pipelines. Explore advanced GitLab features, security scanning, and deployment strategies for modern applications.",
        categories: &["CI/CD", "GitLab", "Automation"],
        read_time: 15,
        featured: true,
        content: None,
    },
    Seed {
        id: "3",
        title: "Kubernetes Security: Hardening Your Clusters",
        slug: "kubernetes-security-hardening-clusters",
        published: (2024, 1, 5),
        excerpt: "Comprehensive guide to Kubernetes security. Learn about RBAC, network policies, pod security standards, and compliance frameworks for production environments.",
        categories: &["Kubernetes", "Security", "DevSecOps"],
        read_time: 18,
        featured: false,
        content: None,
    },
    Seed {
        id: "4",
        title: "Monitoring and Observability with Prometheus & Grafana",
        slug: "monitoring-observability-prometheus-grafana",
        published: (2023, 12, 28),
        excerpt: "Build comprehensive monitoring solutions. Explore metrics collection, alerting strategies, and dashboard design for maintaining system reliability.",
        categories: &["Monitoring", "Prometheus", "Grafana"],
        read_time: 14,
        featured: false,
        content: None,
    },
    Seed {
        id: "5",
        title: "AWS Cost Optimization Strategies",
        slug: "aws-cost-optimization-strategies",
        published: (2023, 12, 20),
        excerpt: "Reduce cloud costs without compromising performance. Learn about resource rightsizing, reserved instances, and automated cost management techniques.",
        categories: &["AWS", "Cost Optimization", "FinOps"],
        read_time: 11,
        featured: false,
        content: None,
    },
    Seed {
        id: "6",
        title: "Container Orchestration: Docker Swarm vs Kubernetes",
        slug: "container-orchestration-docker-swarm-kubernetes",
        published: (2023, 12, 15),
        excerpt: "Compare container orchestration platforms. Understand when to use Docker Swarm vs Kubernetes based on your infrastructure requirements and team expertise.",
        categories: &["Docker", "Kubernetes", "Containers"],
        read_time: 13,
        featured: false,
        content: None,
    },
    Seed {
        id: "7",
        title: "Site Reliability Engineering: SLOs and Error Budgets",
        slug: "site-reliability-engineering-slos-error-budgets",
        published: (2023, 12, 10),
        excerpt: "Implement SRE practices for reliable systems. Learn about Service Level Objectives, error budgets, and balancing reliability with feature velocity.",
        categories: &["SRE", "Reliability", "Performance"],
        read_time: 16,
        featured: false,
        content: None,
    },
    Seed {
        id: "8",
        title: "GitOps: Modern Deployment Strategies",
        slug: "gitops-modern-deployment-strategies",
        published: (2023, 12, 5),
        excerpt: "Embrace GitOps for declarative deployments. Explore ArgoCD, Flux, and best practices for managing applications and infrastructure through Git workflows.",
        categories: &["GitOps", "ArgoCD", "Deployment"],
        read_time: 12,
        featured: false,
        content: None,
    },
    Seed {
        id: "9",
        title: "Multi-Cloud Strategy: Avoiding Vendor Lock-in",
        slug: "multi-cloud-strategy-avoiding-vendor-lockin",
        published: (2023, 11, 28),
        excerpt: "Design cloud-agnostic architectures. Learn about multi-cloud patterns, service abstraction, and strategies for maintaining flexibility across cloud providers.",
        categories: &["Multi-Cloud", "Architecture", "Strategy"],
        read_time: 14,
        featured: false,
        content: None,
    },
    Seed {
        id: "10",
        title: "Automated Security Scanning in DevSecOps",
        slug: "automated-security-scanning-devsecops",
        published: (2023, 11, 20),
        excerpt: "Integrate security into your DevOps pipeline. Explore SAST, DAST, container scanning, and compliance automation for secure software delivery.",
        categories: &["DevSecOps", "Security", "Automation"],
        read_time: 15,
        featured: false,
        content: None,
    },
    Seed {
        id: "11",
        title: "Disaster Recovery Planning for Cloud Infrastructure",
        slug: "disaster-recovery-planning-cloud-infrastructure",
        published: (2023, 11, 15),
        excerpt: "Build resilient systems with comprehensive DR strategies. Learn about backup automation, cross-region replication, and recovery testing procedures.",
        categories: &["Disaster Recovery", "AWS", "Resilience"],
        read_time: 17,
        featured: false,
        content: None,
    },
    Seed {
        id: "12",
        title: "Infrastructure Monitoring: Beyond Basic Metrics",
        slug: "infrastructure-monitoring-beyond-basic-metrics",
        published: (2023, 11, 10),
        excerpt: "Advanced monitoring techniques for modern infrastructure. Explore distributed tracing, log aggregation, and predictive analytics for proactive operations.",
        categories: &["Monitoring", "Observability", "Analytics"],
        read_time: 13,
        featured: false,
        content: None,
    },
];

/// The built-in articles in display order
pub fn articles() -> Vec<ContentItem> {
    SEEDS
        .iter()
        .filter_map(|seed| {
            let (y, m, d) = seed.published;
            let Some(published) = NaiveDate::from_ymd_opt(y, m, d) else {
                tracing::warn!("Skipping seed article {} with invalid date", seed.id);
                return None;
            };

            let mut item = ContentItem::new(seed.title, seed.excerpt, published)
                .with_id(seed.id)
                .with_slug(seed.slug)
                .with_categories(seed.categories.iter().copied())
                .with_author(AUTHOR)
                .with_read_time(seed.read_time)
                .with_image(CARD_IMAGE);
            if seed.featured {
                item = item.featured();
            }
            if let Some(content) = seed.content {
                item = item.with_content(content);
            }
            Some(item)
        })
        .collect()
}
