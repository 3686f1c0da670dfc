pub mod d410_weekly_ai_analysis;
