//! Built-in formula records, in display order.

use super::registry::{FormulaGroup, FormulaRecord, Variable};
use crate::calculators::CalculatorKind;

pub static BUILTIN_RECORDS: &[FormulaRecord] = &[
    // ------------------------------------------------------------------------
    // PnL & Costs
    // ------------------------------------------------------------------------
    FormulaRecord {
        id: "pnl_gross",
        group: FormulaGroup::PnlAndCosts,
        title_localized: "الربح/الخسارة الإجمالي",
        title_canonical: "Gross PnL",
        formula_text: "PnL($) = TicksMoved × TickValue@1.00 × Lots",
        variables: &[
            Variable::new(
                "TicksMoved",
                "Ticks the price moved for or against the trade",
                "عدد التيكات التي تحركها السعر لصالح/ضد الصفقة",
            ),
            Variable::new(
                "TickValue@1.00",
                "Dollar value of one tick at 1.00 lot",
                "قيمة التيك بالدولار عند لوت 1.00",
            ),
            Variable::new("Lots", "Position size in lots", "حجم الصفقة (اللوت)"),
        ],
        example_text: "TicksMoved=50, TickValue@1.00=0.10, Lots=0.20 ⇒ PnL = 50×0.10×0.20 = $1.00",
        example_localized: "مثال رمزي: إذا TicksMoved=50 و TickValue@1.00=0.10 و Lots=0.20 ⇒ PnL=50×0.10×0.20=$1.00",
        rationale_text: "Shows how lot size and tick value drive the result of a scalping trade.",
        rationale_localized: "يساعدك على فهم تأثير اللوت وقيمة التيك على نتيجة صفقة السكالبينج.",
        advanced: false,
        calculator: Some(CalculatorKind::GrossNetPnl),
    },
    FormulaRecord {
        id: "spread_cost",
        group: FormulaGroup::PnlAndCosts,
        title_localized: "تكلفة السبريد",
        title_canonical: "Spread Cost",
        formula_text: "SpreadCost($) = SpreadTicks × TickValue@1.00 × Lots",
        variables: &[
            Variable::new("SpreadTicks", "Spread measured in ticks", "السبريد محسوب بالتيك"),
            Variable::new(
                "TickValue@1.00",
                "Dollar value of one tick at 1.00 lot",
                "قيمة التيك عند لوت 1.00",
            ),
            Variable::new("Lots", "Position size in lots", "حجم الصفقة"),
        ],
        example_text: "SpreadTicks=18, TickValue=0.10, Lots=0.30 ⇒ SpreadCost = 18×0.10×0.30 = $0.54",
        example_localized: "مثال: SpreadTicks=18 و TickValue=0.10 و Lots=0.30 ⇒ SpreadCost=18×0.10×0.30=$0.54",
        rationale_text: "Scalping targets are small, so the spread can consume a large share of the profit.",
        rationale_localized: "لأن السكالبينج أهدافه صغيرة، فالسبريد قد يستهلك جزءًا كبيرًا من الربح.",
        advanced: false,
        calculator: Some(CalculatorKind::GrossNetPnl),
    },
    FormulaRecord {
        id: "commission_cost",
        group: FormulaGroup::PnlAndCosts,
        title_localized: "تكلفة العمولة",
        title_canonical: "Commission Cost",
        formula_text: "CommissionCost($) = CommissionPerLotRoundTurn × Lots",
        variables: &[
            Variable::new(
                "CommissionPerLotRoundTurn",
                "Commission per lot for open plus close, in dollars",
                "عمولة اللوت (فتح+إغلاق) بالدولار",
            ),
            Variable::new("Lots", "Position size in lots", "حجم الصفقة"),
        ],
        example_text: "CommissionPerLotRT=7, Lots=0.25 ⇒ CommissionCost = 7×0.25 = $1.75",
        example_localized: "مثال: CommissionPerLotRT=7 و Lots=0.25 ⇒ CommissionCost=7×0.25=$1.75",
        rationale_text: "Commission can turn small winning trades into breakeven or a net loss.",
        rationale_localized: "العمولة قد تجعل صفقات صغيرة تتحول إلى تعادل أو خسارة صافية.",
        advanced: false,
        calculator: Some(CalculatorKind::GrossNetPnl),
    },
    FormulaRecord {
        id: "net_pnl",
        group: FormulaGroup::PnlAndCosts,
        title_localized: "الربح/الخسارة الصافي",
        title_canonical: "Net PnL",
        formula_text: "NetPnL($) = GrossPnL − SpreadCost − CommissionCost",
        variables: &[
            Variable::new("GrossPnL", "Result before costs", "النتيجة قبل التكاليف"),
            Variable::new("SpreadCost", "Cost of the spread", "تكلفة السبريد"),
            Variable::new("CommissionCost", "Cost of the commission", "تكلفة العمولة"),
        ],
        example_text: "Gross=$5, Spread=$1, Comm=$1.5 ⇒ Net = $2.5",
        example_localized: "مثال: Gross=$5, Spread=$1, Comm=$1.5 ⇒ Net=$2.5",
        rationale_text: "Closer to reality, because real trading always carries costs.",
        rationale_localized: "يعطيك صورة أقرب للواقع لأن التداول الحقيقي يتضمن تكاليف.",
        advanced: false,
        calculator: Some(CalculatorKind::GrossNetPnl),
    },
    FormulaRecord {
        id: "breakeven_ticks",
        group: FormulaGroup::PnlAndCosts,
        title_localized: "حركة التعادل بالتيك",
        title_canonical: "Breakeven Move",
        formula_text: "BreakevenMoveTicks = SpreadTicks + (CommissionCost / (TickValue@1.00 × Lots))",
        variables: &[
            Variable::new("SpreadTicks", "Spread in ticks", "السبريد بالتيك"),
            Variable::new("CommissionCost", "Commission for the trade in dollars", "عمولة الصفقة بالدولار"),
            Variable::new("TickValue@1.00", "Dollar value of one tick at 1.00 lot", "قيمة التيك عند 1.00"),
            Variable::new("Lots", "Position size in lots", "حجم الصفقة"),
        ],
        example_text: "Spread=16, CommissionCost=1.75, TickValue=0.10, Lots=0.25 ⇒ BE = 16 + (1.75/(0.10×0.25))",
        example_localized: "مثال: Spread=16, CommissionCost=1.75, TickValue=0.10, Lots=0.25 ⇒ BE=16+(1.75/(0.10×0.25))",
        rationale_text: "The minimum move before the trade becomes profitable after costs.",
        rationale_localized: "يحدد الحد الأدنى للحركة قبل أن تصبح الصفقة رابحة صافيًا.",
        advanced: false,
        calculator: Some(CalculatorKind::BreakevenMove),
    },
    // ------------------------------------------------------------------------
    // Risk & Position Sizing
    // ------------------------------------------------------------------------
    FormulaRecord {
        id: "risk_usd",
        group: FormulaGroup::RiskAndSizing,
        title_localized: "المخاطرة بالدولار",
        title_canonical: "Risk $",
        formula_text: "Risk($) = Balance × Risk%",
        variables: &[
            Variable::new("Balance", "Account balance", "رصيد الحساب"),
            Variable::new(
                "Risk%",
                "Share of the balance risked per trade (e.g. 1%)",
                "نسبة المخاطرة لكل صفقة (مثلاً 1%)",
            ),
        ],
        example_text: "Balance=500, Risk%=1% ⇒ Risk = $5",
        example_localized: "مثال: Balance=500, Risk%=1% ⇒ Risk=$5",
        rationale_text: "Turns a percentage into a concrete number so you never risk more than intended.",
        rationale_localized: "يحوّل النسبة إلى رقم واضح لتجنب مخاطرة أكبر من المتوقع.",
        advanced: false,
        calculator: Some(CalculatorKind::RiskSizing),
    },
    FormulaRecord {
        id: "lots_from_risk",
        group: FormulaGroup::RiskAndSizing,
        title_localized: "حساب اللوت من المخاطرة",
        title_canonical: "Lots from Risk",
        formula_text: "Lots = Risk($) ÷ (StopTicks × TickValue@1.00)",
        variables: &[
            Variable::new("Risk($)", "Risk in dollars", "المخاطرة بالدولار"),
            Variable::new("StopTicks", "Stop loss in ticks", "وقف الخسارة بالتيك"),
            Variable::new(
                "TickValue@1.00",
                "Dollar value of one tick at 1.00 lot",
                "قيمة التيك عند لوت 1.00",
            ),
        ],
        example_text: "Risk=$5, Stop=100, TickValue=0.10 ⇒ Lots = 5/(100×0.10) = 0.50",
        example_localized: "مثال: Risk=$5, Stop=100, TickValue=0.10 ⇒ Lots=5/(100×0.10)=0.50",
        rationale_text: "Keeps risk constant instead of changing the lot size at random.",
        rationale_localized: "يساعد على توحيد المخاطرة بدل تغيير اللوت عشوائيًا.",
        advanced: false,
        calculator: Some(CalculatorKind::RiskSizing),
    },
    FormulaRecord {
        id: "rr_ratio",
        group: FormulaGroup::RiskAndSizing,
        title_localized: "نسبة العائد للمخاطرة",
        title_canonical: "R:R",
        formula_text: "R:R = TPDistance ÷ SLDistance",
        variables: &[
            Variable::new("TPDistance", "Take-profit distance (ticks or points)", "مسافة الهدف (تيك/نقطة)"),
            Variable::new("SLDistance", "Stop-loss distance (ticks or points)", "مسافة الوقف (تيك/نقطة)"),
        ],
        example_text: "TP=60, SL=30 ⇒ R:R = 2.0",
        example_localized: "مثال: TP=60, SL=30 ⇒ R:R=2.0",
        rationale_text: "Links targets to risk and shows the win rate needed to break even.",
        rationale_localized: "تساعدك تربط أهدافك بالمخاطرة وتفهم متطلبات نسبة الفوز للتعادل.",
        advanced: false,
        calculator: Some(CalculatorKind::RewardRisk),
    },
    FormulaRecord {
        id: "bewr_no_costs",
        group: FormulaGroup::RiskAndSizing,
        title_localized: "نسبة الفوز للتعادل (بدون تكاليف)",
        title_canonical: "Breakeven WinRate",
        formula_text: "Breakeven WinRate = 1 ÷ (1 + R:R)",
        variables: &[Variable::new("R:R", "Reward-to-risk ratio", "نسبة العائد للمخاطرة")],
        example_text: "R:R=2 ⇒ BE WinRate = 1/(1+2) = 33.33%",
        example_localized: "مثال: R:R=2 ⇒ BE WinRate = 1/(1+2)=33.33%",
        rationale_text: "Quick reference for how R:R changes the win rate you need.",
        rationale_localized: "مرجع سريع لفهم كيف تؤثر R:R على متطلبات نسبة الفوز (تعليمي).",
        advanced: false,
        calculator: Some(CalculatorKind::RewardRisk),
    },
    FormulaRecord {
        id: "max_daily_loss",
        group: FormulaGroup::RiskAndSizing,
        title_localized: "حد الخسارة اليومي",
        title_canonical: "Max Daily Loss",
        formula_text: "MaxDailyLoss($) = Balance × DailyLoss%",
        variables: &[
            Variable::new("Balance", "Account balance", "الرصيد"),
            Variable::new("DailyLoss%", "Daily loss limit as a percentage", "نسبة حد الخسارة اليومي"),
        ],
        example_text: "Balance=1000, DailyLoss%=3% ⇒ $30",
        example_localized: "مثال: Balance=1000, DailyLoss%=3% ⇒ $30",
        rationale_text: "A brake that stops escalation after a losing streak.",
        rationale_localized: "يساعد على وضع “فرامل” تعليمية لمنع التصعيد بعد سلسلة خسائر.",
        advanced: false,
        calculator: Some(CalculatorKind::MaxLoss),
    },
    FormulaRecord {
        id: "max_weekly_loss",
        group: FormulaGroup::RiskAndSizing,
        title_localized: "حد الخسارة الأسبوعي",
        title_canonical: "Max Weekly Loss",
        formula_text: "MaxWeeklyLoss($) = Balance × WeeklyLoss%",
        variables: &[
            Variable::new("Balance", "Account balance", "الرصيد"),
            Variable::new("WeeklyLoss%", "Weekly loss limit as a percentage", "نسبة حد الخسارة الأسبوعي"),
        ],
        example_text: "Balance=1000, WeeklyLoss%=7% ⇒ $70",
        example_localized: "مثال: Balance=1000, WeeklyLoss%=7% ⇒ $70",
        rationale_text: "Adds a weekly safeguard that reduces the pressure to win losses back.",
        rationale_localized: "يضيف حماية تعليمية على مستوى الأسبوع لتقليل ضغط التعويض.",
        advanced: false,
        calculator: Some(CalculatorKind::MaxLoss),
    },
    // ------------------------------------------------------------------------
    // Statistics & Edge
    // ------------------------------------------------------------------------
    FormulaRecord {
        id: "winrate",
        group: FormulaGroup::StatisticsAndEdge,
        title_localized: "نسبة الفوز",
        title_canonical: "Win Rate",
        formula_text: "WinRate = Wins ÷ TotalTrades",
        variables: &[
            Variable::new("Wins", "Number of winning trades", "عدد الصفقات الرابحة"),
            Variable::new("TotalTrades", "Total number of trades", "إجمالي الصفقات"),
        ],
        example_text: "Wins=45, Total=100 ⇒ 45%",
        example_localized: "مثال: Wins=45, Total=100 ⇒ 45%",
        rationale_text: "A starting point for judging performance, but meaningless without average win and loss.",
        rationale_localized: "بداية فهم الأداء—لكن لا تكفي وحدها بدون متوسط ربح/خسارة.",
        advanced: false,
        calculator: Some(CalculatorKind::WinRateStats),
    },
    FormulaRecord {
        id: "lossrate",
        group: FormulaGroup::StatisticsAndEdge,
        title_localized: "نسبة الخسارة",
        title_canonical: "Loss Rate",
        formula_text: "LossRate = 1 − WinRate",
        variables: &[Variable::new("WinRate", "Win rate", "نسبة الفوز")],
        example_text: "WinRate=45% ⇒ LossRate = 55%",
        example_localized: "مثال: WinRate=45% ⇒ LossRate=55%",
        rationale_text: "Feeds directly into expectancy.",
        rationale_localized: "تدخل مباشرة في حساب Expectancy.",
        advanced: false,
        calculator: Some(CalculatorKind::WinRateStats),
    },
    FormulaRecord {
        id: "avgwin",
        group: FormulaGroup::StatisticsAndEdge,
        title_localized: "متوسط الربح",
        title_canonical: "Average Win",
        formula_text: "AvgWin = TotalProfit ÷ Wins",
        variables: &[
            Variable::new("TotalProfit", "Sum of all winning trades", "إجمالي الأرباح (مجموع الربح)"),
            Variable::new("Wins", "Number of winning trades", "عدد الصفقات الرابحة"),
        ],
        example_text: "TotalProfit=260, Wins=40 ⇒ AvgWin = $6.50",
        example_localized: "مثال: TotalProfit=260, Wins=40 ⇒ AvgWin=$6.50",
        rationale_text: "Together with win rate it shows the quality of the winners.",
        rationale_localized: "مع WinRate يوضح جودة الصفقات الرابحة.",
        advanced: false,
        calculator: Some(CalculatorKind::WinRateStats),
    },
    FormulaRecord {
        id: "avgloss",
        group: FormulaGroup::StatisticsAndEdge,
        title_localized: "متوسط الخسارة",
        title_canonical: "Average Loss",
        formula_text: "AvgLoss = TotalLoss ÷ Losses (absolute value)",
        variables: &[
            Variable::new("TotalLoss", "Sum of all losing trades (absolute)", "إجمالي الخسائر (كمطلق)"),
            Variable::new("Losses", "Number of losing trades", "عدد الصفقات الخاسرة"),
        ],
        example_text: "TotalLoss=200, Losses=50 ⇒ AvgLoss = $4.00",
        example_localized: "مثال: TotalLoss=200, Losses=50 ⇒ AvgLoss=$4.00",
        rationale_text: "Tells you whether your losses are larger than your wins or the other way round.",
        rationale_localized: "مفتاح لمعرفة هل خسائرك أكبر من أرباحك أم العكس.",
        advanced: false,
        calculator: Some(CalculatorKind::WinRateStats),
    },
    FormulaRecord {
        id: "profitfactor",
        group: FormulaGroup::StatisticsAndEdge,
        title_localized: "عامل الربحية",
        title_canonical: "Profit Factor",
        formula_text: "ProfitFactor = TotalProfit ÷ TotalLoss",
        variables: &[
            Variable::new("TotalProfit", "Sum of all winning trades", "مجموع الأرباح"),
            Variable::new("TotalLoss", "Sum of all losing trades (absolute)", "مجموع الخسائر (كمطلق)"),
        ],
        example_text: "Profit=260, Loss=200 ⇒ PF = 1.30",
        example_localized: "مثال: Profit=260, Loss=200 ⇒ PF=1.30",
        rationale_text: "Above 1 means historical profits exceeded losses. Not a guarantee.",
        rationale_localized: "مؤشر إجمالي: >1 يعني الأرباح أكبر من الخسائر تاريخيًا (لا ضمان).",
        advanced: false,
        calculator: Some(CalculatorKind::WinRateStats),
    },
    FormulaRecord {
        id: "expect_usd",
        group: FormulaGroup::StatisticsAndEdge,
        title_localized: "التوقع الرياضي بالدولار",
        title_canonical: "Expectancy ($)",
        formula_text: "Expectancy($) = (WinRate×AvgWin) − (LossRate×AvgLoss)",
        variables: &[
            Variable::new("WinRate", "Win rate (0..1)", "نسبة الفوز (0..1)"),
            Variable::new("AvgWin", "Average win in dollars", "متوسط الربح بالدولار"),
            Variable::new("LossRate", "Loss rate (0..1)", "نسبة الخسارة (0..1)"),
            Variable::new("AvgLoss", "Average loss (absolute) in dollars", "متوسط الخسارة (كمطلق) بالدولار"),
        ],
        example_text: "WR=0.45, AW=6.5, LR=0.55, AL=4 ⇒ Exp = 0.45×6.5 − 0.55×4",
        example_localized: "مثال: WR=0.45, AW=6.5, LR=0.55, AL=4 ⇒ Exp=0.45×6.5−0.55×4",
        rationale_text: "Average expected profit or loss per trade over many trades.",
        rationale_localized: "يقيس متوسط الربح/الخسارة المتوقع لكل صفقة عبر عدد كبير من الصفقات.",
        advanced: false,
        calculator: Some(CalculatorKind::WinRateStats),
    },
    FormulaRecord {
        id: "expect_r",
        group: FormulaGroup::StatisticsAndEdge,
        title_localized: "التوقع الرياضي بوحدة R",
        title_canonical: "Expectancy (R)",
        formula_text: "Expectancy(R) = (WinRate×AvgWinR) − (LossRate×AvgLossR)",
        variables: &[
            Variable::new("AvgWinR", "Average win in R units", "متوسط الربح بوحدة R"),
            Variable::new(
                "AvgLossR",
                "Average loss in R units (usually 1)",
                "متوسط الخسارة بوحدة R (عادة 1)",
            ),
        ],
        example_text: "WR=0.40, AvgWinR=1.8, LR=0.60, AvgLossR=1 ⇒ ExpR = 0.40×1.8 − 0.60×1",
        example_localized: "مثال: WR=0.40, AvgWinR=1.8, LR=0.60, AvgLossR=1 ⇒ ExpR=0.40×1.8−0.60×1",
        rationale_text: "Compares strategies independently of account size.",
        rationale_localized: "يفيد للمقارنة بين استراتيجيات مختلفة بغض النظر عن حجم الحساب.",
        advanced: false,
        calculator: Some(CalculatorKind::WinRateStats),
    },
    FormulaRecord {
        id: "drawdown",
        group: FormulaGroup::StatisticsAndEdge,
        title_localized: "نسبة السحب (Drawdown)",
        title_canonical: "Drawdown %",
        formula_text: "Drawdown% = (PeakEquity − TroughEquity) ÷ PeakEquity × 100",
        variables: &[
            Variable::new("PeakEquity", "Highest equity reached", "أعلى قيمة وصل لها صافي الحساب"),
            Variable::new("TroughEquity", "Lowest equity after that peak", "أدنى قيمة بعدها"),
        ],
        example_text: "Peak=1200, Trough=1020 ⇒ DD% = (180/1200)×100 = 15%",
        example_localized: "مثال: Peak=1200, Trough=1020 ⇒ DD%=(180/1200)×100=15%",
        rationale_text: "Shows the worst historical decline and its effect on psychology and risk management.",
        rationale_localized: "يساعد على فهم “أسوأ هبوط” تاريخيًا وكيف يؤثر على نفسية وإدارة المخاطر.",
        advanced: false,
        calculator: Some(CalculatorKind::Drawdown),
    },
    FormulaRecord {
        id: "ror_simple",
        group: FormulaGroup::StatisticsAndEdge,
        title_localized: "مخاطر الإفلاس (تقريب تعليمي)",
        title_canonical: "Risk of Ruin (Simple)",
        formula_text: "Concept: the more you risk per trade and the longer a possible losing streak, the more likely the account is depleted.",
        variables: &[
            Variable::new("Risk/Trade", "Risk taken per trade", "المخاطرة لكل صفقة"),
            Variable::new("WinRate", "Win rate", "نسبة الفوز"),
            Variable::new("R:R", "Reward-to-risk ratio", "العائد للمخاطرة"),
        ],
        example_text: "High risk + insufficient WinRate ⇒ higher chance of a deep decline.",
        example_localized: "مثال رمزي: مخاطرة عالية + WinRate غير كافية ⇒ احتمال هبوط كبير أعلى.",
        rationale_text: "A reminder that management matters more than any single trade. The advanced model is not implemented.",
        rationale_localized: "للتذكير أن الإدارة أهم من “صفقة واحدة”. (بطاقة تعليمية — advanced غير مطبق).",
        advanced: true,
        calculator: None,
    },
    // ------------------------------------------------------------------------
    // Margin & Leverage
    // ------------------------------------------------------------------------
    FormulaRecord {
        id: "margin",
        group: FormulaGroup::MarginAndLeverage,
        title_localized: "المارجن التقريبي",
        title_canonical: "Margin (Approx.)",
        formula_text: "Margin ≈ (ContractValue × Lots) ÷ Leverage",
        variables: &[
            Variable::new(
                "ContractValue",
                "Contract value (may depend on price and contract size)",
                "قيمة العقد (قد تعتمد على السعر/حجم العقد)",
            ),
            Variable::new("Lots", "Position size in lots", "حجم الصفقة"),
            Variable::new(
                "Leverage",
                "Leverage (1:500 ⇒ Leverage=500)",
                "الرافعة (مثلاً 1:500 ⇒ Leverage=500)",
            ),
        ],
        example_text: "ContractValue=100000, Lots=0.1, Leverage=500 ⇒ Margin ≈ (100000×0.1)/500",
        example_localized: "مثال رمزي: ContractValue=100000, Lots=0.1, Leverage=500 ⇒ Margin≈(100000×0.1)/500",
        rationale_text: "Shows how leverage changes the margin required.",
        rationale_localized: "لفهم كيف تؤثر الرافعة على الهامش المطلوب (تعليمي).",
        advanced: false,
        calculator: Some(CalculatorKind::Margin),
    },
    FormulaRecord {
        id: "margin_level",
        group: FormulaGroup::MarginAndLeverage,
        title_localized: "مستوى المارجن",
        title_canonical: "Margin Level %",
        formula_text: "MarginLevel% = Equity ÷ UsedMargin × 100",
        variables: &[
            Variable::new(
                "Equity",
                "Account equity including floating PnL",
                "صافي الحساب (يشمل الربح/الخسارة العائم)",
            ),
            Variable::new("UsedMargin", "Margin currently in use", "الهامش المستخدم"),
        ],
        example_text: "Equity=900, UsedMargin=300 ⇒ 300%",
        example_localized: "مثال: Equity=900, UsedMargin=300 ⇒ 300%",
        rationale_text: "An account-health indicator relative to margin.",
        rationale_localized: "مؤشر صحيّة الحساب بالنسبة للهامش (تعليمي فقط).",
        advanced: false,
        calculator: Some(CalculatorKind::Margin),
    },
    // ------------------------------------------------------------------------
    // Extras
    // ------------------------------------------------------------------------
    FormulaRecord {
        id: "ticks_from_price",
        group: FormulaGroup::Extras,
        title_localized: "تحويل حركة السعر إلى تيك",
        title_canonical: "Ticks from Price Move",
        formula_text: "TicksMoved = PriceMove ÷ TickSize",
        variables: &[
            Variable::new("PriceMove", "Price difference (e.g. 0.50)", "فرق السعر (مثلاً 0.50)"),
            Variable::new("TickSize", "Tick size (e.g. 0.01)", "حجم التيك (مثلاً 0.01)"),
        ],
        example_text: "PriceMove=0.50, TickSize=0.01 ⇒ Ticks = 50",
        example_localized: "مثال: PriceMove=0.50, TickSize=0.01 ⇒ Ticks=50",
        rationale_text: "Some calculators take ticks rather than raw prices.",
        rationale_localized: "لأن بعض الحاسبات تستخدم ticks بدل السعر مباشرة.",
        advanced: false,
        calculator: Some(CalculatorKind::TicksFromPrice),
    },
    FormulaRecord {
        id: "net_rr_with_costs",
        group: FormulaGroup::Extras,
        title_localized: "R:R تقريبي بعد التكاليف",
        title_canonical: "Net R:R (Approx.)",
        formula_text: "NetRewardTicks ≈ TP_Ticks − BreakevenMoveTicks",
        variables: &[
            Variable::new("TP_Ticks", "Target in ticks", "الهدف بالتيك"),
            Variable::new("BreakevenMoveTicks", "Breakeven move in ticks", "تيكات التعادل"),
        ],
        example_text: "TP=40 ticks, BE=18 ticks ⇒ NetReward ≈ 22 ticks",
        example_localized: "مثال: TP=40 ticks, BE=18 ticks ⇒ NetReward≈22 ticks",
        rationale_text: "Shows how the real reward shrinks once costs are paid.",
        rationale_localized: "تعليميًا: يوضح كيف تقل “المكافأة” الفعلية بعد التكاليف.",
        advanced: false,
        calculator: Some(CalculatorKind::NetReward),
    },
];
