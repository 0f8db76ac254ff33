//! The seeded house collection.

use crate::ids::TeaId;
use crate::money::Money;

use super::tea::{Caffeine, Category, HarvestInfo, SteepingInfo, Tea};

/// The Verdant Leaf house collection.
pub(super) fn house_collection() -> Vec<Tea> {
    vec![
        Tea {
            id: TeaId::new("1"),
            name: "Misty Peak Dragon Well".to_string(),
            category: Category::GreenTea,
            price: Money::inr(149_900),
            description: "A legendary green tea with a chestnut-like aroma and flat, \
                          sword-shaped leaves. Hand-picked from the high altitudes of Hangzhou."
                .to_string(),
            image: "https://images.unsplash.com/photo-1597481499750-3e6b22637e12?auto=format&fit=crop&q=80&w=800"
                .to_string(),
            origin: "Hangzhou, China".to_string(),
            region: "West Lake Region".to_string(),
            caffeine: Caffeine::Medium,
            rating: 4.9,
            review_count: 128,
            benefits: vec![
                "Rich in antioxidants".to_string(),
                "Metabolism boost".to_string(),
                "Calming effect".to_string(),
            ],
            steeping: SteepingInfo {
                temperature: "80°C".to_string(),
                time: "2-3 mins".to_string(),
                cups_per_pack: "approx. 80 cups".to_string(),
            },
            harvest: HarvestInfo {
                year: "2024".to_string(),
                flush: "Pre-Qingming Flush".to_string(),
                elevation: "800m".to_string(),
                tasting_notes: vec![
                    "Chestnut".to_string(),
                    "Buttery".to_string(),
                    "Grassy".to_string(),
                ],
                processing: "Wok-fired by hand".to_string(),
            },
        },
        Tea {
            id: TeaId::new("2"),
            name: "Imperial Golden Needle".to_string(),
            category: Category::BlackTea,
            price: Money::inr(189_900),
            description: "An exquisite black tea featuring downy golden buds. Offers notes of \
                          honey, sweet potato, and subtle chocolate."
                .to_string(),
            image: "https://images.unsplash.com/photo-1594631252845-29fc4586c557?auto=format&fit=crop&q=80&w=800"
                .to_string(),
            origin: "Yunnan, China".to_string(),
            region: "Fengqing Highlands".to_string(),
            caffeine: Caffeine::High,
            rating: 4.8,
            review_count: 85,
            benefits: vec![
                "Energy boost".to_string(),
                "Heart health".to_string(),
                "Gut wellness".to_string(),
            ],
            steeping: SteepingInfo {
                temperature: "95°C".to_string(),
                time: "3-5 mins".to_string(),
                cups_per_pack: "approx. 75 cups".to_string(),
            },
            harvest: HarvestInfo {
                year: "2024".to_string(),
                flush: "Early Spring Flush".to_string(),
                elevation: "1200m".to_string(),
                tasting_notes: vec![
                    "Wild Honey".to_string(),
                    "Malt".to_string(),
                    "Caramel".to_string(),
                ],
                processing: "Fully Oxidized".to_string(),
            },
        },
        Tea {
            id: TeaId::new("3"),
            name: "Silver Needle Supreme".to_string(),
            category: Category::WhiteTea,
            price: Money::inr(249_900),
            description: "The finest white tea, consisting only of young, silver-downy buds. \
                          Delicate, sweet, and incredibly refreshing."
                .to_string(),
            image: "https://images.unsplash.com/photo-1563822249548-9a72b6353cd1?auto=format&fit=crop&q=80&w=800"
                .to_string(),
            origin: "Fujian, China".to_string(),
            region: "Fuding Mountains".to_string(),
            caffeine: Caffeine::Low,
            rating: 5.0,
            review_count: 42,
            benefits: vec![
                "Youthful skin".to_string(),
                "Immune support".to_string(),
                "Stress relief".to_string(),
            ],
            steeping: SteepingInfo {
                temperature: "75°C".to_string(),
                time: "4-6 mins".to_string(),
                cups_per_pack: "approx. 100 cups".to_string(),
            },
            harvest: HarvestInfo {
                year: "2024".to_string(),
                flush: "First Flush".to_string(),
                elevation: "1000m".to_string(),
                tasting_notes: vec![
                    "Melon".to_string(),
                    "White Peach".to_string(),
                    "Floral".to_string(),
                ],
                processing: "Sun-dried".to_string(),
            },
        },
        Tea {
            id: TeaId::new("4"),
            name: "Iron Goddess Oolong".to_string(),
            category: Category::Oolong,
            price: Money::inr(129_900),
            description: "A premium Tie Guan Yin with a floral, orchid-like fragrance and a \
                          creamy, lingering finish."
                .to_string(),
            image: "https://images.unsplash.com/photo-1544787210-2213d2427507?auto=format&fit=crop&q=80&w=800"
                .to_string(),
            origin: "Anxi, China".to_string(),
            region: "Anxi Fujian".to_string(),
            caffeine: Caffeine::Medium,
            rating: 4.7,
            review_count: 210,
            benefits: vec![
                "Weight management".to_string(),
                "Mental clarity".to_string(),
                "Bone health".to_string(),
            ],
            steeping: SteepingInfo {
                temperature: "90°C".to_string(),
                time: "2-3 mins".to_string(),
                cups_per_pack: "approx. 90 cups".to_string(),
            },
            harvest: HarvestInfo {
                year: "2023".to_string(),
                flush: "Autumn Flush".to_string(),
                elevation: "900m".to_string(),
                tasting_notes: vec![
                    "Orchid".to_string(),
                    "Milk".to_string(),
                    "Toasted Rice".to_string(),
                ],
                processing: "Semi-oxidized & Rolled".to_string(),
            },
        },
    ]
}
