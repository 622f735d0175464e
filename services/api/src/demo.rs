use crate::infra::{format_cents, InMemoryPortfolio};
use cardgenie::error::AppError;
use cardgenie::rewards::{
    spending_summary, AlertThresholds, Recommendation, RewardsCatalog, RewardsService,
    SpendingSummary, StatementImporter,
};
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Purchase category (dining, groceries, travel, gas, shopping,
    /// entertainment; anything else falls back to the everyday bucket)
    #[arg(long)]
    pub(crate) category: String,
    /// Purchase amount in dollars, e.g. 84.50
    #[arg(long, value_parser = crate::infra::parse_amount_cents)]
    pub(crate) amount: u32,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Purchase category used for the recommendation portion of the demo
    #[arg(long, default_value = "dining")]
    pub(crate) category: String,
    /// Purchase amount in dollars (defaults to $100.00)
    #[arg(long, default_value = "100.00", value_parser = crate::infra::parse_amount_cents)]
    pub(crate) amount: u32,
    /// Optional statement CSV export to hydrate the spending insights
    #[arg(long)]
    pub(crate) statement_csv: Option<PathBuf>,
    /// Message to send through the assistant portion of the demo
    #[arg(long)]
    pub(crate) message: Option<String>,
    /// Skip the assistant portion of the demo
    #[arg(long)]
    pub(crate) skip_assistant: bool,
}

fn build_service() -> RewardsService<InMemoryPortfolio> {
    RewardsService::new(
        Arc::new(RewardsCatalog::standard()),
        Arc::new(InMemoryPortfolio::default()),
        AlertThresholds::default(),
    )
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs { category, amount } = args;
    let service = build_service();
    let recommendation = service.recommend(&category, amount);
    render_recommendation(&recommendation);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        category,
        amount,
        statement_csv,
        message,
        skip_assistant,
    } = args;

    let service = build_service();
    service.connect_full_catalog();

    println!("CardGenie rewards demo");

    let view = service.portfolio_view();
    println!("\nConnected cards");
    for card in &view.cards {
        println!(
            "- {} ({} ...{}) | limit {} | balance {} ({:.0}% utilization)",
            card.name,
            card.network,
            card.last_four,
            format_cents(card.credit_limit_cents),
            format_cents(card.current_balance_cents),
            card.utilization_pct
        );
    }

    println!("\nLoyalty accounts");
    for account in &view.loyalty_accounts {
        let expiry_note = match account.days_until_expiration {
            Some(days) => format!(" | expires in {} days", days),
            None => String::new(),
        };
        println!(
            "- {}: {} points ({} value){}",
            account.program,
            account.point_balance,
            format_cents(account.value_cents),
            expiry_note
        );
    }

    println!(
        "\nPortfolio value: {} across loyalty balances | {} expiring soon | {:.0}% overall utilization",
        format_cents(view.summary.total_rewards_value_cents),
        format_cents(view.summary.expiring_value_cents),
        view.summary.utilization_pct
    );

    let feed = service.alerts(Utc::now());
    if feed.alerts.is_empty() {
        println!("\nAlerts: none");
    } else {
        println!(
            "\nAlerts ({} urgent, {} warning, {} info)",
            feed.counts.urgent, feed.counts.warning, feed.counts.info
        );
        for alert in &feed.alerts {
            let risk_note = match alert.value_at_risk_cents {
                Some(cents) => format!(" | value at risk {}", format_cents(cents)),
                None => String::new(),
            };
            println!(
                "- [{}] {}: {}{}",
                alert.severity_label, alert.title, alert.message, risk_note
            );
        }
    }

    let recommendation = service.recommend(&category, amount);
    println!();
    render_recommendation(&recommendation);

    let summary = match statement_csv {
        Some(path) => {
            let transactions = StatementImporter::from_path(path)?;
            println!("\nSpending insights (imported statement)");
            spending_summary(&transactions, None)
        }
        None => {
            println!("\nSpending insights (recent activity)");
            service.spending(None)
        }
    };
    render_spending(&summary);

    println!("\nGoals");
    for goal in service.goals() {
        println!(
            "- {} ({}): {} of {} ({:.0}%), target {}",
            goal.name,
            goal.kind_label,
            format_cents(goal.current_cents),
            format_cents(goal.target_cents),
            goal.progress_pct,
            goal.target_date
        );
    }

    if skip_assistant {
        return Ok(());
    }

    let message =
        message.unwrap_or_else(|| "Which card should I use for groceries?".to_string());
    let reply = service.assistant_reply(&message);
    println!("\nAssistant");
    println!("> {}", message);
    println!("{}", reply.reply);
    if let Some(follow_up) = reply.follow_up {
        println!("({follow_up})");
    }

    Ok(())
}

fn render_recommendation(recommendation: &Recommendation) {
    println!(
        "Best card for {} at {}: {}",
        recommendation.category.label(),
        format_cents(recommendation.amount_cents),
        recommendation.best.card_name
    );
    println!(
        "  Estimated reward: {} ({}x)",
        format_cents(recommendation.best.estimated_reward_cents),
        recommendation.best.multiplier
    );
    println!("  {}", recommendation.best.reasoning);
    println!("  Alternatives:");
    for alternative in &recommendation.alternatives {
        println!(
            "  - {} | {} ({}x) | {}",
            alternative.card_name,
            format_cents(alternative.estimated_reward_cents),
            alternative.multiplier,
            alternative.reasoning
        );
    }
}

fn render_spending(summary: &SpendingSummary) {
    println!(
        "- {} transactions | {} spent | {} points earned ({:.1}% average return)",
        summary.transaction_count,
        format_cents(summary.total_spend_cents),
        summary.total_rewards_earned,
        summary.average_reward_rate_pct
    );
    for entry in &summary.by_category {
        println!(
            "  - {}: {} spent, {} points",
            entry.category_label,
            format_cents(entry.amount_cents),
            entry.rewards_earned
        );
    }
}
