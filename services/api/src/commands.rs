use crate::infra::{parse_date, read_json_file};
use crate::routes::delivery_windows;
use chrono::{Local, NaiveDate};
use clap::Args;
use evercraft::applications::{
    calculate_application_completeness, generate_rejection_feedback, score_application,
    ApplicationScore, RejectionFeedback, SellerApplication,
};
use evercraft::eco::{
    calculate_shop_tier, product_completeness, shop_completeness, CompletenessBreakdown,
    ProductEcoProfile, ShopEcoProfile,
};
use evercraft::error::AppError;
use evercraft::shipping::{
    calculate_shipping, load_cart_csv, ShippingCalculationInput, ShippingCalculationResult,
    ShippingMethod,
};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Cart subtotal in dollars (ignored when --cart is given)
    #[arg(long)]
    pub(crate) subtotal: Option<f64>,
    /// Total cart weight in pounds (not allowed with --cart)
    #[arg(long)]
    pub(crate) weight: Option<f64>,
    /// Destination country; omit for domestic
    #[arg(long)]
    pub(crate) country: Option<String>,
    /// Requested method: standard, express or overnight
    #[arg(long)]
    pub(crate) method: Option<ShippingMethod>,
    /// Cart CSV export with Name,Unit Price,Quantity,Weight columns
    #[arg(long)]
    pub(crate) cart: Option<PathBuf>,
    /// Order date used for delivery estimates (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) ordered_on: Option<NaiveDate>,
    /// Print JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// Path to the eco-profile JSON document
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Print JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ApplicationArgs {
    /// Path to the seller application JSON document
    #[arg(long)]
    pub(crate) application: PathBuf,
    /// Print JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_shipping_quote(args: QuoteArgs) -> Result<(), AppError> {
    let QuoteArgs {
        subtotal,
        weight,
        country,
        method,
        cart,
        ordered_on,
        json,
    } = args;

    let input = match cart {
        Some(_) if weight.is_some() => {
            return Err(AppError::Input(
                "--weight cannot be combined with --cart; weights come from the CSV".to_string(),
            ))
        }
        Some(path) => {
            let items = load_cart_csv(path)?;
            ShippingCalculationInput::from_cart(&items, country, method)
        }
        None => ShippingCalculationInput {
            subtotal: subtotal.ok_or_else(|| {
                AppError::Input("--subtotal is required without --cart".to_string())
            })?,
            item_count: 0,
            total_weight: weight,
            destination_country: country,
            method,
        },
    };

    let quote = calculate_shipping(&input);
    let ordered_on = ordered_on.unwrap_or_else(|| Local::now().date_naive());

    if json {
        return print_json(&quote);
    }
    print!("{}", render_quote(&quote, ordered_on));
    Ok(())
}

pub(crate) fn run_shop_completeness(args: ProfileArgs) -> Result<(), AppError> {
    let profile: ShopEcoProfile = read_json_file(&args.profile)?;
    let breakdown = shop_completeness(&profile);

    if args.json {
        return print_json(&breakdown);
    }
    print!("{}", render_breakdown("Shop eco-profile", &breakdown));
    println!(
        "Seller application score: {}%",
        calculate_application_completeness(&profile).score
    );
    for practice in profile.missing_practices() {
        println!("  - missing: {practice}");
    }
    Ok(())
}

pub(crate) fn run_product_completeness(args: ProfileArgs) -> Result<(), AppError> {
    let profile: ProductEcoProfile = read_json_file(&args.profile)?;
    let breakdown = product_completeness(&profile);

    if args.json {
        return print_json(&breakdown);
    }
    print!("{}", render_breakdown("Product eco-profile", &breakdown));
    Ok(())
}

pub(crate) fn run_application_score(args: ApplicationArgs) -> Result<(), AppError> {
    let application: SellerApplication = read_json_file(&args.application)?;
    let score = score_application(&application);

    if args.json {
        return print_json(&score);
    }
    print!("{}", render_application_score(&application, &score));
    Ok(())
}

pub(crate) fn run_application_feedback(args: ApplicationArgs) -> Result<(), AppError> {
    let application: SellerApplication = read_json_file(&args.application)?;
    let score = calculate_application_completeness(&application.eco_profile).score;
    let feedback = generate_rejection_feedback(&application.eco_profile, score);

    if args.json {
        return print_json(&feedback);
    }
    print!("{}", render_feedback(&feedback));
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn render_quote(quote: &ShippingCalculationResult, ordered_on: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Shipping quote ({:?}, ordered {ordered_on})",
        quote.zone
    );
    if quote.is_free_shipping {
        let _ = writeln!(out, "- free shipping applied");
    } else {
        let _ = writeln!(
            out,
            "- ${:.2} more for free shipping (threshold ${:.2})",
            quote.amount_to_free_shipping, quote.free_shipping_threshold
        );
    }

    let windows = delivery_windows(quote, ordered_on);
    for (rate, window) in quote.available_rates.iter().zip(windows.iter()) {
        let marker = if rate.method == quote.selected_method {
            "*"
        } else {
            " "
        };
        let _ = writeln!(
            out,
            "{marker} {:<20} ${:>6.2}  {} (arrives {} to {})",
            rate.label, rate.cost, rate.estimated_days, window.earliest, window.latest
        );
    }
    let _ = writeln!(
        out,
        "Selected {}: ${:.2}",
        quote.selected_method, quote.shipping_cost
    );
    out
}

pub(crate) fn render_breakdown(title: &str, breakdown: &CompletenessBreakdown) -> String {
    let tier = calculate_shop_tier(breakdown.score);
    format!(
        "{title}: {}% complete ({})\n- practices: {}/{}\n- details: {}/{}\n",
        breakdown.score,
        tier.label(),
        breakdown.tier1_count,
        breakdown.tier1_max,
        breakdown.tier2_count,
        breakdown.tier2_max
    )
}

pub(crate) fn render_application_score(
    application: &SellerApplication,
    score: &ApplicationScore,
) -> String {
    let mut out = render_breakdown(
        &format!("Application from {}", application.business_name),
        &score.completeness,
    );
    let _ = writeln!(
        out,
        "- auto-approval: {} | review time: {}",
        if score.auto_approval_eligible {
            "eligible"
        } else {
            "not eligible"
        },
        score.estimated_review_time.label()
    );
    if !score.red_flags.is_empty() {
        let _ = writeln!(out, "- red flags: {}", score.red_flags.join(", "));
    }
    for suggestion in &score.improvement_suggestions {
        let _ = writeln!(out, "  * {suggestion}");
    }
    out
}

pub(crate) fn render_feedback(feedback: &RejectionFeedback) -> String {
    let mut out = format!("{}\n", feedback.reason);
    if !feedback.missing_practices.is_empty() {
        let _ = writeln!(
            out,
            "Missing practices: {}",
            feedback.missing_practices.join(", ")
        );
    }
    for step in &feedback.actionable_steps {
        let _ = writeln!(out, "- {step}");
    }
    let _ = writeln!(out, "Resources: {}", feedback.resource_links.join(" "));
    out
}
