//! The five fixed report tasks.

use crate::task::ReportTaskSpec;
use planner_model::ModelTier;

/// Report names in bundle order.
pub const REPORT_NAMES: [&str; 5] =
    ["Universities", "Financial", "Lifestyle", "Airlines", "Currency"];

const NO_REASONING: &str = "Do NOT include thoughts, reasoning steps, or explanations.";

const STRUCTURED_FORMAT: &str =
    "Return the answer in the following **structured Markdown format without using tables**:\n\n";

const STRUCTURED_ONLY: &str =
    "Do not include any reasoning or extra text. Only return the structured output.";

pub fn universities() -> ReportTaskSpec {
    ReportTaskSpec::new("Universities", "University Finder", ModelTier::Fast)
        .goal(
            "Return a list of top 10 private universities and the offered program details in \
             {country} for foreign students that provides degree programs for the level {level} \
             in {stream}. Do not include prices.",
        )
        .backstory(format!(
            "You provide accurate private university names for foreign students with the \
             location and program details (Specializations / Majors, Program Duration, \
             Reputation / Ranking, University ranking). {}",
            NO_REASONING
        ))
        .description(
            "List private universities in {country} for foreign students that provides degree \
             programs for the level {level} in {stream}.",
        )
        .expected_output(
            "Markdown list of accurate private university names for foreign students with the \
             location and program details (Specializations / Majors, Program Duration, \
             Reputation / Ranking, University ranking). Do not include thoughts or reasoning. \
             Do not include text 'Final Answer' or 'Thought: I now can give a great answer' text.",
        )
}

pub fn financial() -> ReportTaskSpec {
    ReportTaskSpec::new("Financial", "Financial Planner", ModelTier::Versatile)
        .goal(
            "Return the budget free monthly Living Expenses like Rent, food, transport in LKR for \
             {country} at {current_time} for a single student",
        )
        .backstory(format!(
            "You fetch the rough living expenses for a month for a student for Rent, food and \
             transport separately. {}",
            NO_REASONING
        ))
        .description(
            "Return the rough living expenses for a month for a university student for Rent, food \
             and transport separately in {country} at {current_time}.",
        )
        .expected_output(format!(
            "{}##  Estimated Monthly Expenses\n\n\n\
             **Rent:** <rent_range>\n\n\
             **Food:** <food_range>\n\n\
             **Transport:** <transport_range>\n\n\n\
             **Notes:**\n\
             - Rent depends on city and accommodation type.\n\
             - Food costs vary based on personal diet and lifestyle.\n\
             - Transport costs include public transport and occasional taxis.\n\n\
             Replace <rent_range>, <food_range>, <transport_range> with actual values. \
             Do not include any reasoning or extra text.",
            STRUCTURED_FORMAT
        ))
}

pub fn lifestyle() -> ReportTaskSpec {
    ReportTaskSpec::new("Lifestyle", "Lifestyle Expert", ModelTier::Versatile)
        .goal(
            "Return a small description on Cultural Fit like Language, lifestyle, student \
             community, special occasions in {country}.",
        )
        .backstory(format!(
            "You provide a description on lifestyle of the country and special events. {}",
            NO_REASONING
        ))
        .description(
            "A small description on Cultural Fit like Language, lifestyle, student community, \
             special occasions in {country}.",
        )
        .expected_output(format!(
            "{}##  Cultural Fit in {{country}}\n\n\
             **Language:**\n\
             - <Primary language(s)>\n\
             - <Secondary language(s) if any>\n\n\
             **Lifestyle:**\n\
             - <Typical daily routines or social norms>\n\
             - <Student life and community culture>\n\
             - <Cost of living habits, leisure activities>\n\n\
             **Special Occasions & Festivals:**\n\
             - <Major national holidays and celebrations>\n\
             - <Cultural or student-centered events>\n\n\
             {}",
            STRUCTURED_FORMAT, STRUCTURED_ONLY
        ))
}

pub fn airlines() -> ReportTaskSpec {
    ReportTaskSpec::new("Airlines", "Airlines Expert", ModelTier::Fast)
        .goal(
            "Return a list of 10 frequently traveled airlines that operate flights to {country} \
             as of {current_time}.",
        )
        .backstory(format!(
            "You provide airline names only. No flight prices, schedules, or summaries. {}",
            NO_REASONING
        ))
        .description("List airlines flying to {country} as of {current_time}.")
        .expected_output(format!(
            "{}##  Airlines Flying to {{country}}\n\n\
             - <Airline_1>\n\
             - <Airline_2>\n\
             - <Airline_3>\n\
             - <Airline_4>\n\
             - <Airline_5>\n\n\
             **Notes:**\n\
             - This list includes major airlines currently operating flights to {{country}}.\n\
             - Airline schedules may vary; always check the official airline website \
             for updates.\n\n\
             {}",
            STRUCTURED_FORMAT, STRUCTURED_ONLY
        ))
        .search_capable(true)
}

pub fn currency() -> ReportTaskSpec {
    ReportTaskSpec::new("Currency", "Currency Expert", ModelTier::Fast)
        .goal("Return the list of current exchange rate against USD, GBP, EURO, YEN of {country}")
        .backstory(format!(
            "Provide only the currency name/code and exchange rate number. {}",
            NO_REASONING
        ))
        .description(
            "Provide the currency and exchange rate of {country} against USD, GBP, EURO, INR",
        )
        .expected_output(format!(
            "{}##  Currency Exchange Rates\n\n\
             **Currency:** USD\n\
             **Rate:** 1 <country_currency> = <usd_rate>\n\n\
             **Currency:** GBP\n\
             **Rate:** 1 <country_currency> = <gbp_rate>\n\n\
             **Currency:** EURO\n\
             **Rate:** 1 <country_currency> = <euro_rate>\n\n\
             **Currency:** INR\n\
             **Rate:** 1 <country_currency> = <inr_rate>\n\n\
             **Notes:**\n\
             - Rates are approximate and may fluctuate daily.\n\n\
             {}",
            STRUCTURED_FORMAT, STRUCTURED_ONLY
        ))
        .search_capable(true)
}

/// All five tasks in bundle order.
pub fn standard_catalog() -> Vec<ReportTaskSpec> {
    vec![universities(), financial(), lifestyle(), airlines(), currency()]
}
