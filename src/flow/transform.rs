//! Structure-preserving transformations.

/// Transformations that consume a container and build a new one of the
/// same shape: zero-or-one stays zero-or-one, many stays many.
pub trait Transformable: Sized {
    type Value;
    type Mapped<B>;

    fn map<B, F>(self, mapper: F) -> Self::Mapped<B>
    where
        F: FnMut(Self::Value) -> B;

    /// Keep the values satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Self::Value) -> bool;

    /// Keep the values *not* satisfying `predicate`.
    fn filter_not<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&Self::Value) -> bool,
    {
        self.filter(move |v| !predicate(v))
    }

    fn flat_map<B, I, F>(self, mapper: F) -> Self::Mapped<B>
    where
        F: FnMut(Self::Value) -> I,
        I: IntoIterator<Item = B>;

    /// Run `action` on every value, then hand the container back unchanged.
    fn peek<F>(self, action: F) -> Self
    where
        F: FnMut(&Self::Value);
}

impl<A> Transformable for Vec<A> {
    type Value = A;
    type Mapped<B> = Vec<B>;

    fn map<B, F>(self, mapper: F) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        self.into_iter().map(mapper).collect()
    }

    fn filter<P>(mut self, mut predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        self.retain(|v| predicate(v));
        self
    }

    /// Concatenates everything the mapper produces.
    fn flat_map<B, I, F>(self, mapper: F) -> Vec<B>
    where
        F: FnMut(A) -> I,
        I: IntoIterator<Item = B>,
    {
        self.into_iter().flat_map(mapper).collect()
    }

    fn peek<F>(self, action: F) -> Self
    where
        F: FnMut(&A),
    {
        self.iter().for_each(action);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_transforms_keep_order() {
        let v = vec![1, 2, 3, 4];
        assert_eq!(Transformable::map(v.clone(), |x| x * 10), vec![10, 20, 30, 40]);
        assert_eq!(Transformable::filter(v.clone(), |x| x % 2 == 0), vec![2, 4]);
        assert_eq!(v.clone().filter_not(|x| x % 2 == 0), vec![1, 3]);
        assert_eq!(
            Transformable::flat_map(v, |x| std::iter::repeat_n(x, x as usize)),
            vec![1, 2, 2, 3, 3, 3, 4, 4, 4, 4]
        );
    }

    #[test]
    fn peek_sees_every_value() {
        let mut seen = 0;
        let v = vec![5, 6].peek(|x| seen += x);
        assert_eq!(seen, 11);
        assert_eq!(v, vec![5, 6]);
    }
}
