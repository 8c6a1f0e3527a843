// ABOUTME: Prompt templates fed to the chat endpoint for each intent category
// ABOUTME: Formats at most five upstream records into a numbered list with N/A fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TripXplo AI

//! Prompt construction. Each builder produces a role-setting preamble,
//! the quoted user query, a 1-based numbered list of records, and a
//! category-specific closing instruction. Record fields that are missing
//! upstream render as `"N/A"` — prompts never fail on malformed data.

use serde_json::Value;

/// Hard cap on records embedded in a prompt, regardless of fetch size
pub const MAX_PROMPT_RECORDS: usize = 5;

/// Placeholder for absent record fields
const MISSING: &str = "N/A";

/// Read the first present field from a record, rendering numbers as text.
fn field(record: &Value, keys: &[&str]) -> String {
    for key in keys {
        match record.get(key) {
            Some(Value::String(s)) => return s.clone(),
            Some(Value::Number(n)) => return n.to_string(),
            _ => {}
        }
    }
    MISSING.to_owned()
}

/// Numbered `name (ID: ...)` list for records with the given field names.
fn numbered_list(records: &[Value], name_key: &str, id_key: &str) -> String {
    records
        .iter()
        .take(MAX_PROMPT_RECORDS)
        .enumerate()
        .map(|(i, record)| {
            format!(
                "{}. {} (ID: {})",
                i + 1,
                field(record, &[name_key]),
                field(record, &[id_key]),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered package list with duration and starting price lines.
fn numbered_packages(packages: &[Value]) -> String {
    packages
        .iter()
        .take(MAX_PROMPT_RECORDS)
        .enumerate()
        .map(|(i, package)| {
            format!(
                "{}. {} (ID: {})\n   Duration: {}D/{}N\n   Starting From: ₹{}",
                i + 1,
                field(package, &["packageName"]),
                field(package, &["packageId", "id"]),
                field(package, &["noOfDays"]),
                field(package, &["noOfNight"]),
                field(package, &["startFrom"]),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt for hotel queries.
#[must_use]
pub fn hotel_prompt(query: &str, hotels: &[Value]) -> String {
    format!(
        "You are a helpful travel assistant.\n\n\
         The user asked about hotels: \"{query}\"\n\n\
         Here are some hotel options matching the request:\n\n\
         {}\n\n\
         Please provide a warm, clear, and friendly summary for these hotel options \
         including name, highlights, price (if available), and Hotel ID.\n\n\
         End with a call to action encouraging booking or further questions.",
        numbered_list(hotels, "hotelName", "hotelId"),
    )
}

/// Prompt for vehicle queries.
#[must_use]
pub fn vehicle_prompt(query: &str, vehicles: &[Value]) -> String {
    format!(
        "You are a helpful travel assistant.\n\n\
         The user asked about vehicles: \"{query}\"\n\n\
         Here are some vehicle options matching the request:\n\n\
         {}\n\n\
         Please provide a friendly summary for these vehicles including name, type, \
         price (if available), and Vehicle ID.\n\n\
         End with a call to action encouraging booking or further questions.",
        numbered_list(vehicles, "vehicleName", "vehicleId"),
    )
}

/// Prompt for activity queries.
#[must_use]
pub fn activity_prompt(query: &str, activities: &[Value]) -> String {
    format!(
        "You are a helpful travel assistant.\n\n\
         The user asked about activities: \"{query}\"\n\n\
         Here are some activity options matching the request:\n\n\
         {}\n\n\
         Please provide a warm, engaging summary for these activities including name, \
         highlights, price (if available), and Activity ID.\n\n\
         End with a call to action encouraging booking or further questions.",
        numbered_list(activities, "activityName", "activityId"),
    )
}

/// Prompt for package queries with matching results.
#[must_use]
pub fn package_prompt(query: &str, packages: &[Value]) -> String {
    format!(
        "You are a helpful travel assistant.\n\n\
         The user asked about packages: \"{query}\"\n\n\
         Step-by-step:\n\n\
         1. Identify the main destination or theme.\n\
         2. Find the best matches from the packages below.\n\
         3. Summarize each package with name, duration, highlights, price, and Package ID.\n\
         4. Present warmly and clearly, grouped by destination if applicable.\n\
         5. End with a friendly call to action.\n\n\
         Here are the matching packages ({} found):\n\n\
         {}",
        packages.len(),
        numbered_packages(packages),
    )
}

/// Prompt for the popular-packages fallback when no match was found.
#[must_use]
pub fn popular_packages_prompt(query: &str, packages: &[Value]) -> String {
    format!(
        "You are a helpful travel assistant.\n\n\
         The user asked: \"{query}\"\n\n\
         We couldn't find exact matches, but here are some popular travel packages:\n\n\
         {}\n\n\
         Please format this as a friendly, inviting travel recommendation showing \
         duration, price, and Package ID clearly.",
        numbered_packages(packages),
    )
}
