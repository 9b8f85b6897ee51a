use diesel::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{NewSustainabilityTip, SustainabilityTip, TipCategory};

/// Built-in tip content, seeded into an empty database.
pub struct SampleTip {
    pub title: &'static str,
    pub description: &'static str,
    pub category: TipCategory,
    pub impact_kg_co2: Decimal,
}

pub static SAMPLE_TIPS: [SampleTip; 10] = [
    SampleTip {
        title: "Switch to LED Bulbs",
        description: "Replace traditional bulbs with LED bulbs. They use 75% less energy and last 25 times longer. In India, this can save ₹500-1000 per year on electricity bills.",
        category: TipCategory::Energy,
        impact_kg_co2: dec!(50.0),
    },
    SampleTip {
        title: "Use Solar Water Heater",
        description: "Install a solar water heater. In sunny India, you can meet 60-80% of your hot water needs with solar energy, reducing LPG consumption significantly.",
        category: TipCategory::Energy,
        impact_kg_co2: dec!(200.0),
    },
    SampleTip {
        title: "Opt for Public Transport",
        description: "Use buses, trains, or metro instead of personal vehicles. Delhi Metro alone has helped reduce 2.5 million tons of CO2 emissions annually.",
        category: TipCategory::Transport,
        impact_kg_co2: dec!(100.0),
    },
    SampleTip {
        title: "Cycle for Short Distances",
        description: "Use a bicycle for distances under 5 km. It's healthy, saves money on fuel, and produces zero emissions. Many Indian cities now have dedicated cycling lanes.",
        category: TipCategory::Transport,
        impact_kg_co2: dec!(30.0),
    },
    SampleTip {
        title: "Reduce Meat Consumption",
        description: "Try meatless Mondays or reduce meat consumption. Traditional Indian vegetarian diets are not only healthy but also have a lower carbon footprint.",
        category: TipCategory::Diet,
        impact_kg_co2: dec!(80.0),
    },
    SampleTip {
        title: "Buy Local and Seasonal",
        description: "Purchase fruits and vegetables from local markets. This reduces transportation emissions and supports local farmers. Seasonal produce is also cheaper and fresher.",
        category: TipCategory::Diet,
        impact_kg_co2: dec!(40.0),
    },
    SampleTip {
        title: "Compost Kitchen Waste",
        description: "Start composting kitchen waste. In India, 60% of household waste is organic. Composting reduces methane emissions and creates natural fertilizer for your garden.",
        category: TipCategory::Waste,
        impact_kg_co2: dec!(25.0),
    },
    SampleTip {
        title: "Use Cloth Bags",
        description: "Carry cloth bags for shopping. India generates 3.3 million tons of plastic waste annually. Using cloth bags reduces plastic waste and saves money.",
        category: TipCategory::Waste,
        impact_kg_co2: dec!(15.0),
    },
    SampleTip {
        title: "Install Rainwater Harvesting",
        description: "Set up rainwater harvesting at home. In water-scarce regions of India, this can reduce dependence on energy-intensive water supply systems.",
        category: TipCategory::General,
        impact_kg_co2: dec!(60.0),
    },
    SampleTip {
        title: "Use Traditional Cooling Methods",
        description: "Use traditional methods like clay pots, bamboo screens, and proper ventilation instead of air conditioning when possible. This can reduce electricity consumption by 30-40%.",
        category: TipCategory::Energy,
        impact_kg_co2: dec!(120.0),
    },
];

impl From<&SampleTip> for NewSustainabilityTip {
    fn from(tip: &SampleTip) -> Self {
        NewSustainabilityTip {
            title: tip.title.to_string(),
            description: tip.description.to_string(),
            category: tip.category.to_string(),
            impact_kg_co2: tip.impact_kg_co2,
            indian_context: true,
        }
    }
}

pub fn get_tip_by_title(
    conn: &mut SqliteConnection,
    tip_title: &str,
) -> Result<Option<SustainabilityTip>, diesel::result::Error> {
    use crate::schema::sustainability_tips::dsl::*;
    sustainability_tips
        .filter(title.eq(tip_title))
        .select(SustainabilityTip::as_select())
        .first(conn)
        .optional()
}

pub fn insert_tip(
    conn: &mut SqliteConnection,
    new_tip: NewSustainabilityTip,
) -> Result<SustainabilityTip, diesel::result::Error> {
    use crate::schema::sustainability_tips::dsl::*;

    diesel::insert_into(sustainability_tips).values(new_tip).execute(conn)?;
    sustainability_tips
        .order(id.desc())
        .select(SustainabilityTip::as_select())
        .first(conn)
}

/// Inserts every sample tip whose title is not already present. Returns the
/// number of tips created, so a second run returns 0.
pub fn seed_sample_tips(conn: &mut SqliteConnection) -> Result<usize, diesel::result::Error> {
    conn.transaction(|conn| {
        let mut created = 0;
        for sample in &SAMPLE_TIPS {
            if get_tip_by_title(conn, sample.title)?.is_none() {
                insert_tip(conn, sample.into())?;
                created += 1;
            }
        }
        Ok(created)
    })
}

pub fn count_tips(conn: &mut SqliteConnection) -> Result<i64, diesel::result::Error> {
    use crate::schema::sustainability_tips::dsl::*;
    sustainability_tips.count().get_result(conn)
}

/// Tips for Indian households, optionally limited to one category.
pub fn get_tips(
    conn: &mut SqliteConnection,
    for_category: Option<TipCategory>,
    limit: Option<i64>,
) -> Result<Vec<SustainabilityTip>, diesel::result::Error> {
    use crate::schema::sustainability_tips::dsl::*;

    let mut query = sustainability_tips.filter(indian_context.eq(true)).into_boxed();
    if let Some(c) = for_category {
        query = query.filter(category.eq(c.as_str()));
    }
    if let Some(n) = limit {
        query = query.limit(n);
    }
    query.order(id.asc()).select(SustainabilityTip::as_select()).load(conn)
}
