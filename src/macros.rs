//! 简化 From trait 实现的宏

/// 为配置类型自动实现 From trait
///
/// 用法：`impl_from!(ConfigType => Type)`，展开为调用 `Type::new(config)`
#[macro_export]
macro_rules! impl_from {
    ($config_type:ty => $target_type:ty) => {
        impl From<$config_type> for $target_type {
            fn from(config: $config_type) -> Self {
                <$target_type>::new(config)
            }
        }
    };
}

#[cfg(test)]
mod tests {

    #[derive(Debug)]
    struct TestConfig {
        value: String,
    }

    #[derive(Debug)]
    struct TestTarget {
        config: TestConfig,
    }

    impl TestTarget {
        fn new(config: TestConfig) -> Self {
            Self { config }
        }
    }

    impl_from!(TestConfig => TestTarget);

    #[test]
    fn test_impl_from_new() {
        let config = TestConfig {
            value: "test".to_string(),
        };
        let target = TestTarget::from(config);
        assert_eq!(target.config.value, "test");
    }
}
