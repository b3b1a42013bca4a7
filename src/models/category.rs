use super::TransactionType;

/// Display color used for anything without a known category.
pub(crate) const UNKNOWN_COLOR: &str = "#6B7280";
pub(crate) const UNKNOWN_NAME: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CategoryIcon {
    UtensilsCrossed,
    Car,
    ShoppingBag,
    Gamepad2,
    Receipt,
    Heart,
    GraduationCap,
    MoreHorizontal,
    Briefcase,
    Laptop,
    TrendingUp,
    Plus,
    Target,
}

impl CategoryIcon {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::UtensilsCrossed => "UtensilsCrossed",
            Self::Car => "Car",
            Self::ShoppingBag => "ShoppingBag",
            Self::Gamepad2 => "Gamepad2",
            Self::Receipt => "Receipt",
            Self::Heart => "Heart",
            Self::GraduationCap => "GraduationCap",
            Self::MoreHorizontal => "MoreHorizontal",
            Self::Briefcase => "Briefcase",
            Self::Laptop => "Laptop",
            Self::TrendingUp => "TrendingUp",
            Self::Plus => "Plus",
            Self::Target => "Target",
        }
    }

    /// Single-cell glyph for terminal listings.
    pub(crate) fn glyph(&self) -> char {
        match self {
            Self::UtensilsCrossed => '🍴',
            Self::Car => '🚗',
            Self::ShoppingBag => '🛍',
            Self::Gamepad2 => '🎮',
            Self::Receipt => '🧾',
            Self::Heart => '♥',
            Self::GraduationCap => '🎓',
            Self::MoreHorizontal => '…',
            Self::Briefcase => '💼',
            Self::Laptop => '💻',
            Self::TrendingUp => '📈',
            Self::Plus => '+',
            Self::Target => '◎',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub kind: TransactionType,
    pub icon: CategoryIcon,
}

/// Name, color and icon to show for a category id, known or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CategoryDisplay {
    pub name: &'static str,
    pub color: &'static str,
    pub icon: CategoryIcon,
}

impl CategoryDisplay {
    pub(crate) const UNKNOWN: CategoryDisplay = CategoryDisplay {
        name: UNKNOWN_NAME,
        color: UNKNOWN_COLOR,
        icon: CategoryIcon::Target,
    };

    pub(crate) fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

const fn category(
    id: &'static str,
    name: &'static str,
    color: &'static str,
    kind: TransactionType,
    icon: CategoryIcon,
) -> Category {
    Category {
        id,
        name,
        color,
        kind,
        icon,
    }
}

static REGISTRY: [Category; 12] = [
    category("food", "Food & Dining", "#EF4444", TransactionType::Expense, CategoryIcon::UtensilsCrossed),
    category("transport", "Transportation", "#F97316", TransactionType::Expense, CategoryIcon::Car),
    category("shopping", "Shopping", "#EAB308", TransactionType::Expense, CategoryIcon::ShoppingBag),
    category("entertainment", "Entertainment", "#8B5CF6", TransactionType::Expense, CategoryIcon::Gamepad2),
    category("bills", "Bills & Utilities", "#06B6D4", TransactionType::Expense, CategoryIcon::Receipt),
    category("healthcare", "Healthcare", "#10B981", TransactionType::Expense, CategoryIcon::Heart),
    category("education", "Education", "#3B82F6", TransactionType::Expense, CategoryIcon::GraduationCap),
    category("other-expense", "Other Expenses", "#6B7280", TransactionType::Expense, CategoryIcon::MoreHorizontal),
    category("salary", "Salary", "#10B981", TransactionType::Income, CategoryIcon::Briefcase),
    category("freelance", "Freelance", "#059669", TransactionType::Income, CategoryIcon::Laptop),
    category("investment", "Investment", "#0D9488", TransactionType::Income, CategoryIcon::TrendingUp),
    category("other-income", "Other Income", "#047857", TransactionType::Income, CategoryIcon::Plus),
];

impl Category {
    pub(crate) fn all() -> &'static [Category] {
        &REGISTRY
    }

    pub(crate) fn find_by_id(id: &str) -> Option<&'static Category> {
        REGISTRY.iter().find(|c| c.id == id)
    }

    /// Categories of one type, in registry order.
    pub(crate) fn by_type(kind: TransactionType) -> impl Iterator<Item = &'static Category> {
        Self::all().iter().filter(move |c| c.kind == kind)
    }

    /// Presentation for `id`, degrading to a placeholder for ids not in the registry.
    pub(crate) fn display(id: &str) -> CategoryDisplay {
        Self::find_by_id(id)
            .map(|c| CategoryDisplay {
                name: c.name,
                color: c.color,
                icon: c.icon,
            })
            .unwrap_or(CategoryDisplay::UNKNOWN)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
